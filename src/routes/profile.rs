use actix_web::{web, HttpRequest, HttpResponse};
use uuid::Uuid;

use crate::auth::authenticate;
use crate::error::ApiError;
use crate::models::{ProfileUpdateRequest, PublicProfile, UpdateResponse};
use crate::routes::AppState;

/// Configure profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/me", web::get().to(me))
        .route("/me", web::put().to(update_me))
        .route("/profile/{id}", web::get().to(public_profile));
}

/// Return the authenticated user's own profile, credential hash stripped
///
/// GET /me
async fn me(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let user = authenticate(&state.postgres, &req).await?;

    Ok(HttpResponse::Ok().json(PublicProfile::from(user)))
}

/// Apply a partial profile update
///
/// PUT /me
///
/// A body with no fields is a no-op and reports `updated: false` without
/// touching the store.
async fn update_me(
    state: web::Data<AppState>,
    req: HttpRequest,
    update: web::Json<ProfileUpdateRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = authenticate(&state.postgres, &req).await?;

    if update.is_empty() {
        return Ok(HttpResponse::Ok().json(UpdateResponse { updated: false }));
    }

    let updated = state.postgres.update_profile(user.id, &update).await?;

    Ok(HttpResponse::Ok().json(UpdateResponse { updated }))
}

/// Fetch any user's public profile
///
/// GET /profile/{id}
async fn public_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    // Unparseable ids cannot name a stored user
    let id = Uuid::parse_str(&path.into_inner())
        .map_err(|_| ApiError::NotFound("User not found".to_string()))?;

    let user = state
        .postgres
        .find_user_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(PublicProfile::from(user)))
}
