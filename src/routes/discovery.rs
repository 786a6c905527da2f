use actix_web::{web, HttpRequest, HttpResponse};

use crate::auth::authenticate;
use crate::error::ApiError;
use crate::models::{DiscoverResponse, PublicProfile};
use crate::routes::AppState;

/// Configure discovery routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/discover", web::get().to(discover));
}

/// Surface candidates the requester has not swiped on
///
/// GET /discover
///
/// The store scan is capped before filtering, so a requester can receive
/// fewer than all eligible candidates when more exist beyond the cap.
async fn discover(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let user = authenticate(&state.postgres, &req).await?;

    let swiped = state.postgres.swiped_target_ids(user.id).await?;
    let scanned = state
        .postgres
        .list_profiles(state.discovery.scan_limit())
        .await?;

    let candidates = state.discovery.filter(user.id, &swiped, scanned);

    tracing::debug!(
        "Discovery for {}: {} candidates ({} swiped excluded)",
        user.id,
        candidates.len(),
        swiped.len()
    );

    let profiles = candidates.into_iter().map(PublicProfile::from).collect();

    Ok(HttpResponse::Ok().json(DiscoverResponse { profiles }))
}
