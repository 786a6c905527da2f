// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{User, PublicProfile, Session, Swipe, SwipeAction, MatchKey, MatchRecord};
pub use requests::{SignupRequest, LoginRequest, ProfileUpdateRequest, SwipeRequest};
pub use responses::{
    DiagnosticsResponse, DiscoverResponse, ErrorResponse, LoginResponse, MatchesResponse,
    RootResponse, SignupResponse, SwipeResponse, UpdateResponse, UserSummary,
};
