use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request to create an account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Request to log in
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Partial profile update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub interests: Option<Vec<String>>,
    pub photos: Option<Vec<String>>,
}

impl ProfileUpdateRequest {
    /// True when no field was provided at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.gender.is_none()
            && self.date_of_birth.is_none()
            && self.location.is_none()
            && self.bio.is_none()
            && self.interests.is_none()
            && self.photos.is_none()
    }
}

/// Request to record a swipe
///
/// The action is carried as text so that unknown values can be rejected
/// with a 400 instead of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SwipeRequest {
    pub target_id: Uuid,
    #[validate(length(min = 1))]
    pub action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_validates_email() {
        let req = SignupRequest {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };
        assert!(req.validate().is_err());

        let req = SignupRequest {
            name: "A".to_string(),
            email: "a@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_profile_update_is_empty() {
        let empty = ProfileUpdateRequest::default();
        assert!(empty.is_empty());

        let update = ProfileUpdateRequest {
            bio: Some("hello".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_swipe_request_deserializes() {
        let json = format!(
            r#"{{"target_id": "{}", "action": "like"}}"#,
            Uuid::new_v4()
        );
        let req: SwipeRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.action, "like");
    }
}
