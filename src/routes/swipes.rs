use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::auth::authenticate;
use crate::error::ApiError;
use crate::models::{MatchKey, MatchesResponse, PublicProfile, SwipeAction, SwipeRequest, SwipeResponse};
use crate::routes::AppState;

/// Configure swipe and match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/swipe", web::post().to(swipe))
        .route("/matches", web::get().to(matches));
}

/// Record a swipe and evaluate it for a mutual match
///
/// POST /swipe
///
/// The swipe is appended to the ledger unconditionally; only a like
/// triggers the reciprocal lookup. On a mutual like the match row is
/// ensured via an atomic insert-if-absent on the canonical pair, and the
/// outcome is `match: true` whether the row is new or already existed.
async fn swipe(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<SwipeRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = authenticate(&state.postgres, &req).await?;

    body.validate()
        .map_err(|e| ApiError::InvalidArgument(e.to_string()))?;

    let action = SwipeAction::parse(&body.action)
        .ok_or_else(|| ApiError::InvalidArgument("Invalid action".to_string()))?;

    state
        .postgres
        .insert_swipe(user.id, body.target_id, action)
        .await?;

    let reciprocal = match action {
        SwipeAction::Like => {
            state
                .postgres
                .has_reciprocal_like(body.target_id, user.id)
                .await?
        }
        SwipeAction::Pass => false,
    };

    let outcome = state.engine.evaluate(action, reciprocal);

    if outcome.matched {
        let key = MatchKey::new(user.id, body.target_id);
        let created = state.postgres.create_match_if_absent(key).await?;
        if created {
            tracing::info!("New match: {} <-> {}", key.user_a, key.user_b);
        }
    }

    Ok(HttpResponse::Ok().json(SwipeResponse {
        ok: true,
        matched: outcome.matched,
    }))
}

/// List the requester's match partners as public profiles
///
/// GET /matches
async fn matches(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let user = authenticate(&state.postgres, &req).await?;

    let records = state.postgres.matches_for_user(user.id).await?;

    let mut partners = Vec::with_capacity(records.len());
    for record in &records {
        let partner_id = record.partner_of(user.id);
        // A partner deleted out-of-band is skipped, not an error
        if let Some(partner) = state.postgres.find_user_by_id(partner_id).await? {
            partners.push(PublicProfile::from(partner));
        }
    }

    Ok(HttpResponse::Ok().json(MatchesResponse { matches: partners }))
}
