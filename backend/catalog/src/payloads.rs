//! Bodies exchanged between the contact form and the server.
use serde::{Deserialize, Serialize};

/// reCAPTCHA action name the contact form requests tokens for.
pub const SUBMIT_ACTION: &str = "submit_form";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub app: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub token: String,
}

/// Body of every `/api/recaptcha` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub ok: bool,
    pub message: String,
}

/// Body of every `/api/submit-form` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_relay_response_omits_missing_status() {
        let ok = RelayResponse {
            success: true,
            message: "Form submitted successfully".to_string(),
            status: None,
        };

        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({ "success": true, "message": "Form submitted successfully" })
        );
    }

    #[test]
    fn test_relay_response_reads_upstream_status() {
        let failed: RelayResponse = serde_json::from_value(json!({
            "success": false,
            "message": "Failed to submit form",
            "status": 500
        }))
        .unwrap();

        assert_eq!(failed.status, Some(500));
    }
}
