use actix_web::{web, HttpResponse, Responder};

use crate::models::{DiagnosticsResponse, RootResponse};
use crate::routes::AppState;

/// Configure system routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/test", web::get().to(diagnostics));
}

/// Root banner
async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: "Matri API running".to_string(),
    })
}

/// Diagnostic endpoint reporting store connectivity and table names
///
/// GET /test
async fn diagnostics(state: web::Data<AppState>) -> impl Responder {
    let database_url = if std::env::var("DATABASE_URL").is_ok() {
        "set"
    } else {
        "not set"
    };

    let mut response = DiagnosticsResponse {
        backend: "running".to_string(),
        database: "not available".to_string(),
        database_url: database_url.to_string(),
        database_name: None,
        connection_status: "not connected".to_string(),
        tables: vec![],
    };

    match state.postgres.health_check().await {
        Ok(true) => {
            response.database = "connected".to_string();
            response.connection_status = "connected".to_string();
            response.database_name = state.postgres.database_name().await.ok();
            response.tables = state.postgres.list_tables().await.unwrap_or_default();
        }
        Ok(false) => {}
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            response.database = format!("error: {}", e);
        }
    }

    HttpResponse::Ok().json(response)
}
