//! Matri API - matchmaking backend service for the Matri dating app
//!
//! Accounts, bearer-token sessions, profile editing, candidate discovery,
//! swipe recording, and mutual-match detection over PostgreSQL. The
//! swipe/match rules live in the `core` module as pure logic; handlers
//! orchestrate the store around them.

pub mod auth;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{pair_state, DiscoveryFilter, MatchEngine, MatchOutcome, PairState, StoreOrder};
pub use crate::models::{MatchKey, MatchRecord, PublicProfile, Session, Swipe, SwipeAction, User};

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(MatchKey::new(a, b), MatchKey::new(b, a));

        let engine = MatchEngine::new();
        assert!(engine.evaluate(SwipeAction::Like, true).matched);
    }
}
