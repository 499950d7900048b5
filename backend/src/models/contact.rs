use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Contact / request-for-quote payload.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ContactRequest {
    #[validate(length(min = 2, max = 100, message = "name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "invalid email address"), length(max = 254))]
    pub email: String,

    #[validate(length(max = 32, message = "phone must be at most 32 characters"))]
    pub phone: Option<String>,

    #[validate(length(min = 3, max = 150, message = "subject must be 3-150 characters"))]
    pub subject: String,

    #[validate(length(min = 10, max = 5000, message = "message must be 10-5000 characters"))]
    pub message: String,
}

impl ContactRequest {
    /// Strip control characters from every field. Length bounds are checked
    /// by `validate()` against the sanitized text, so call this first.
    pub fn sanitized(self) -> Self {
        Self {
            name: strip_control(&self.name),
            email: strip_control(&self.email),
            phone: self.phone.as_deref().map(strip_control),
            subject: strip_control(&self.subject),
            message: strip_control_keep_newlines(&self.message),
        }
    }
}

fn strip_control(input: &str) -> String {
    input.trim().chars().filter(|c| !c.is_control()).collect()
}

fn strip_control_keep_newlines(input: &str) -> String {
    input.trim().chars().filter(|c| !c.is_control() || *c == '\n').collect()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    pub code: i32,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ContactRequest {
        ContactRequest {
            name: "Ayşe Demir".to_string(),
            email: "ayse@example.com".to_string(),
            phone: Some("+90 555 000 0000".to_string()),
            subject: "Laser cutting quote".to_string(),
            message: "We need 500 brackets cut from 3mm stainless.".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().sanitized().validate().is_ok());
    }

    #[test]
    fn test_length_bounds() {
        let mut request = valid_request();
        request.name = "A".to_string();
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.message = "short".to_string();
        assert!(request.validate().is_err());

        let mut request = valid_request();
        request.message = "x".repeat(5001);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_control_characters_stripped() {
        let mut request = valid_request();
        request.name = "Ayşe\u{0000} Demir\r".to_string();
        request.message = "line one\nline two\u{0007}".to_string();
        let sanitized = request.sanitized();
        assert_eq!(sanitized.name, "Ayşe Demir");
        assert_eq!(sanitized.message, "line one\nline two");
    }
}
