use chrono::{DateTime, Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;

/// Generate an opaque, URL-safe session token
///
/// Alphanumeric output from the OS random source; at the default length of
/// 48 characters this carries well over 256 bits of entropy.
pub fn generate_token(length: usize) -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Expiry timestamp for a session issued now
pub fn session_expiry(ttl_days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(ttl_days)
}
