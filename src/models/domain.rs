use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User account with profile fields and credential hash
///
/// Not serializable on purpose: the credential hash must never reach a
/// response body. Use [`PublicProfile`] for anything user-facing.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub interests: Vec<String>,
    pub photos: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User profile with the credential hash stripped and the id as a string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub interests: Vec<String>,
    pub photos: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for PublicProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            name: user.name,
            gender: user.gender,
            date_of_birth: user.date_of_birth,
            location: user.location,
            bio: user.bio,
            interests: user.interests,
            photos: user.photos,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Bearer session issued at login
///
/// Validity is purely `expires_at > now`; sessions are never revoked.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A user's directional decision about a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "swipe_action", rename_all = "lowercase")]
pub enum SwipeAction {
    Like,
    Pass,
}

impl SwipeAction {
    /// Parse the wire representation; anything outside "like"/"pass" is rejected
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "like" => Some(SwipeAction::Like),
            "pass" => Some(SwipeAction::Pass),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeAction::Like => "like",
            SwipeAction::Pass => "pass",
        }
    }
}

/// One row of the append-only swipe ledger
#[derive(Debug, Clone, FromRow)]
pub struct Swipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub target_id: Uuid,
    pub action: SwipeAction,
    pub created_at: DateTime<Utc>,
}

/// Canonically ordered user pair identifying a match
///
/// The constructor sorts the two ids, so `MatchKey::new(a, b)` and
/// `MatchKey::new(b, a)` produce the same key. `user_a <= user_b` always
/// holds, matching the storage constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchKey {
    pub user_a: Uuid,
    pub user_b: Uuid,
}

impl MatchKey {
    pub fn new(x: Uuid, y: Uuid) -> Self {
        if x <= y {
            Self { user_a: x, user_b: y }
        } else {
            Self { user_a: y, user_b: x }
        }
    }
}

/// Confirmed mutual-like relationship between two users
#[derive(Debug, Clone, FromRow)]
pub struct MatchRecord {
    pub id: Uuid,
    pub user_a: Uuid,
    pub user_b: Uuid,
    pub created_at: DateTime<Utc>,
}

impl MatchRecord {
    /// The other side of the pair from the viewer's perspective
    pub fn partner_of(&self, viewer: Uuid) -> Uuid {
        if self.user_a == viewer {
            self.user_b
        } else {
            self.user_a
        }
    }
}
