//! # Submission Validation
//!
//! The relay never trusts the client's checks. A request body is narrowed
//! field by field into a [`ValidatedSubmission`], stopping at the first
//! failure in the order name, email, app, message.
use catalog::{
    fields::{EMAIL_MAX, MESSAGE_MAX, NAME_MAX, char_len, is_valid_email},
    is_allowed_app,
};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Invalid request body")]
    InvalidBody,

    #[error("Name is required")]
    NameRequired,

    #[error("Name must be 200 characters or less")]
    NameTooLong,

    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email format")]
    EmailInvalid,

    #[error("Email must be 254 characters or less")]
    EmailTooLong,

    #[error("App selection is required")]
    AppRequired,

    #[error("Invalid app selection")]
    AppUnknown,

    #[error("Message is required")]
    MessageRequired,

    #[error("Message must be 5000 characters or less")]
    MessageTooLong,
}

/// Trimmed fields that passed every server-side check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    name: String,
    email: String,
    app: String,
    message: String,
}

impl ValidatedSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn app(&self) -> &str {
        &self.app
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn validate(body: &Value) -> Result<ValidatedSubmission, FieldError> {
    let fields = body.as_object().ok_or(FieldError::InvalidBody)?;

    let name = required(fields, "name").ok_or(FieldError::NameRequired)?;
    if char_len(name) > NAME_MAX {
        return Err(FieldError::NameTooLong);
    }

    let email = required(fields, "email").ok_or(FieldError::EmailRequired)?;
    if !is_valid_email(email) {
        return Err(FieldError::EmailInvalid);
    }
    if char_len(email) > EMAIL_MAX {
        return Err(FieldError::EmailTooLong);
    }

    let app = required(fields, "app").ok_or(FieldError::AppRequired)?;
    if !is_allowed_app(app) {
        return Err(FieldError::AppUnknown);
    }

    let message = required(fields, "message").ok_or(FieldError::MessageRequired)?;
    if char_len(message) > MESSAGE_MAX {
        return Err(FieldError::MessageTooLong);
    }

    Ok(ValidatedSubmission {
        name: name.to_string(),
        email: email.to_string(),
        app: app.to_string(),
        message: message.to_string(),
    })
}

/// A present, string-typed, non-blank field, trimmed. Anything else counts
/// as missing.
fn required<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn valid_body() -> Value {
        json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "app": "LETS ELEVATOR",
            "message": "Great app!"
        })
    }

    fn with(key: &str, value: Value) -> Value {
        let mut body = valid_body();
        body[key] = value;
        body
    }

    #[test]
    fn test_valid_body_is_trimmed() {
        let body = json!({
            "name": "  Jane Doe ",
            "email": " jane@example.com",
            "app": "LETS ELEVATOR ",
            "message": "\nGreat app!\n"
        });

        let submission = validate(&body).unwrap();
        assert_eq!(submission.name(), "Jane Doe");
        assert_eq!(submission.email(), "jane@example.com");
        assert_eq!(submission.app(), "LETS ELEVATOR");
        assert_eq!(submission.message(), "Great app!");
    }

    #[test]
    fn test_body_must_be_object() {
        assert_eq!(validate(&Value::Null), Err(FieldError::InvalidBody));
        assert_eq!(validate(&json!([valid_body()])), Err(FieldError::InvalidBody));
        assert_eq!(validate(&json!("text")), Err(FieldError::InvalidBody));
    }

    #[test]
    fn test_missing_and_mistyped_fields() {
        assert_eq!(validate(&with("name", json!("   "))), Err(FieldError::NameRequired));
        assert_eq!(validate(&with("name", json!(42))), Err(FieldError::NameRequired));
        assert_eq!(validate(&with("email", Value::Null)), Err(FieldError::EmailRequired));
        assert_eq!(validate(&with("app", json!(""))), Err(FieldError::AppRequired));
        assert_eq!(validate(&with("message", json!(["x"]))), Err(FieldError::MessageRequired));
    }

    #[test]
    fn test_first_failure_wins() {
        assert_eq!(validate(&json!({})), Err(FieldError::NameRequired));
        assert_eq!(
            validate(&json!({ "name": "Jane", "email": "bad", "app": "nope" })),
            Err(FieldError::EmailInvalid)
        );
    }

    #[test]
    fn test_lengths() {
        assert!(validate(&with("name", json!("n".repeat(NAME_MAX)))).is_ok());
        assert_eq!(
            validate(&with("name", json!("n".repeat(NAME_MAX + 1)))),
            Err(FieldError::NameTooLong)
        );

        let long_email = format!("{}@example.com", "a".repeat(EMAIL_MAX));
        assert_eq!(validate(&with("email", json!(long_email))), Err(FieldError::EmailTooLong));

        assert!(validate(&with("message", json!("あ".repeat(MESSAGE_MAX)))).is_ok());
        assert_eq!(
            validate(&with("message", json!("m".repeat(MESSAGE_MAX + 1)))),
            Err(FieldError::MessageTooLong)
        );
    }

    #[test]
    fn test_email_format() {
        assert!(validate(&with("email", json!("a@b.co"))).is_ok());
        assert_eq!(validate(&with("email", json!("a@b"))), Err(FieldError::EmailInvalid));
        assert_eq!(validate(&with("email", json!("a b@c.com"))), Err(FieldError::EmailInvalid));
    }

    #[test]
    fn test_app_must_be_known() {
        assert_eq!(
            validate(&with("app", json!("NonExistentApp"))),
            Err(FieldError::AppUnknown)
        );
        assert!(validate(&with("app", json!("踏切シミュレーター"))).is_ok());
        assert_eq!(validate(&with("app", json!("HOME"))), Err(FieldError::AppUnknown));
    }

    #[test]
    fn test_messages() {
        assert_eq!(FieldError::NameTooLong.to_string(), "Name must be 200 characters or less");
        assert_eq!(FieldError::AppUnknown.to_string(), "Invalid app selection");
    }
}
