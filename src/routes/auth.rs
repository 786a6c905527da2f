use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::auth::{generate_token, hash_password, session_expiry, verify_password};
use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, SignupRequest, SignupResponse, UserSummary};
use crate::routes::AppState;

/// Configure authentication routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/signup", web::post().to(signup))
        .route("/auth/login", web::post().to(login));
}

/// Create an account
///
/// POST /auth/signup
///
/// Emails are compared case-insensitively: the address is lowercased here
/// and the store's unique index rejects duplicates atomically.
async fn signup(
    state: web::Data<AppState>,
    req: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::InvalidArgument(e.to_string()))?;

    let email = req.email.trim().to_lowercase();

    let password_hash =
        hash_password(&req.password).map_err(|e| ApiError::Internal(e.to_string()))?;

    let user = state
        .postgres
        .create_user(&req.name, &email, &password_hash)
        .await?;

    tracing::info!("Account created: {}", user.id);

    Ok(HttpResponse::Ok().json(SignupResponse {
        id: user.id.to_string(),
        email: user.email,
        name: user.name,
    }))
}

/// Log in and issue a bearer token
///
/// POST /auth/login
///
/// A missing account and a wrong password produce the same response.
async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::InvalidArgument(e.to_string()))?;

    let email = req.email.trim().to_lowercase();

    let user = state
        .postgres
        .find_user_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let valid = verify_password(&req.password, &user.password_hash)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    if !valid {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = generate_token(state.auth.token_length);
    let expires_at = session_expiry(state.auth.session_ttl_days);

    let session = state
        .postgres
        .create_session(user.id, &token, expires_at)
        .await?;

    tracing::debug!("Session issued for user {}", user.id);

    Ok(HttpResponse::Ok().json(LoginResponse {
        token: session.token,
        user: UserSummary {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
        },
    }))
}
