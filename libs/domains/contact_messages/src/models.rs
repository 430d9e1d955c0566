use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A stored contact form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Contact form body
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ContactMessageCreate {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1, max = 254))]
    pub email: String,
    #[validate(length(min = 1))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl ContactMessage {
    pub fn new(input: ContactMessageCreate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            subject: input.subject,
            message: input.message,
            timestamp: database::mongodb::now_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContactMessageCreate {
        ContactMessageCreate {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Project".to_string(),
            message: "Let's talk".to_string(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_overlong_email_is_rejected() {
        let input = ContactMessageCreate {
            email: format!("{}@example.com", "a".repeat(250)),
            ..sample()
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_blank_fields_are_each_reported() {
        let input = ContactMessageCreate {
            subject: String::new(),
            message: String::new(),
            ..sample()
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("subject"));
        assert!(fields.contains_key("message"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn test_new_copies_input() {
        let message = ContactMessage::new(sample());
        assert_eq!(message.email, "ada@example.com");
        assert!(!message.id.is_empty());
    }
}
