use serde::{Deserialize, Serialize};
use crate::models::domain::PublicProfile;

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Root banner response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Diagnostic status for the /test endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub tables: Vec<String>,
}

/// Response for a successful signup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Minimal user identity echoed back at login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Response for a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}

/// Response for a profile update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub updated: bool,
}

/// Response for a recorded swipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeResponse {
    pub ok: bool,
    #[serde(rename = "match")]
    pub matched: bool,
}

/// Response for candidate discovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverResponse {
    pub profiles: Vec<PublicProfile>,
}

/// Response listing match partners
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    pub matches: Vec<PublicProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_response_uses_match_key() {
        let response = SwipeResponse { ok: true, matched: false };
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["ok"], true);
        assert_eq!(json["match"], false);
        assert!(json.get("matched").is_none());
    }
}
