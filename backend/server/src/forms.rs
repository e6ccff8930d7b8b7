//! # Google Forms
//!
//! The relay posts to a Google Form's `formResponse` endpoint.
//!
//! ## Form ids
//! - Published ids (`1FAIpQL...`) live under `/d/e/<id>/` and their view page
//!   carries a session token in a hidden `fbzx` input
//! - Editor ids live under `/d/<id>/` and are posted without a token
//!
//! ## fbzx
//! Scraped from the HTML with a pattern. Google does not document when the
//! token is required, so a failed scrape only gets logged and the
//! submission goes out without it.
use std::sync::LazyLock;

use regex::Regex;
use reqwest::{Client, StatusCode};

use crate::validation::ValidatedSubmission;

pub const PUBLISHED_ID_PREFIX: &str = "1FAIpQL";

pub const ENTRY_NAME: &str = "entry.2005620554";
pub const ENTRY_EMAIL: &str = "entry.1045781291";
pub const ENTRY_APP: &str = "entry.1065046570";
pub const ENTRY_MESSAGE: &str = "entry.839337160";

static FBZX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"name="fbzx"\s+value="([^"]+)""#).unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTarget {
    pub submit_url: String,
    /// Only published forms have a view page worth scraping.
    pub view_url: Option<String>,
}

impl FormTarget {
    pub fn new(base_url: &str, form_id: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');

        if is_published(form_id) {
            Self {
                submit_url: format!("{base_url}/d/e/{form_id}/formResponse"),
                view_url: Some(format!("{base_url}/d/e/{form_id}/viewform")),
            }
        } else {
            Self {
                submit_url: format!("{base_url}/d/{form_id}/formResponse"),
                view_url: None,
            }
        }
    }
}

pub fn is_published(form_id: &str) -> bool {
    form_id.starts_with(PUBLISHED_ID_PREFIX)
}

pub fn scrape_fbzx(html: &str) -> Option<String> {
    FBZX_PATTERN
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map(|token| token.as_str().to_string())
}

pub async fn fetch_fbzx(client: &Client, view_url: &str) -> anyhow::Result<String> {
    let html = client
        .get(view_url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    scrape_fbzx(&html).ok_or_else(|| anyhow::anyhow!("no fbzx field on {view_url}"))
}

pub fn build_payload(
    submission: &ValidatedSubmission,
    fbzx: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut payload = vec![
        (ENTRY_NAME, submission.name().to_string()),
        (ENTRY_EMAIL, submission.email().to_string()),
        (ENTRY_APP, submission.app().to_string()),
        (ENTRY_MESSAGE, submission.message().to_string()),
    ];

    if let Some(token) = fbzx {
        payload.push(("fbzx", token.to_string()));
        payload.push(("fvv", "1".to_string()));
        payload.push(("pageHistory", "0".to_string()));
    }

    payload
}

pub async fn submit(
    client: &Client,
    submit_url: &str,
    payload: &[(&'static str, String)],
) -> Result<StatusCode, reqwest::Error> {
    let response = client.post(submit_url).form(payload).send().await?;

    Ok(response.status())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::validation::validate;

    #[test]
    fn test_published_form_target() {
        let target = FormTarget::new("https://docs.google.com/forms/", "1FAIpQLabc");

        assert_eq!(
            target,
            FormTarget {
                submit_url: "https://docs.google.com/forms/d/e/1FAIpQLabc/formResponse".to_string(),
                view_url: Some("https://docs.google.com/forms/d/e/1FAIpQLabc/viewform".to_string()),
            }
        );
    }

    #[test]
    fn test_editor_form_target() {
        let target = FormTarget::new("https://docs.google.com/forms", "1aBcD");

        assert_eq!(target.submit_url, "https://docs.google.com/forms/d/1aBcD/formResponse");
        assert_eq!(target.view_url, None);
    }

    #[test]
    fn test_scrape_fbzx() {
        let html = r#"<form><input type="hidden" name="fbzx" value="-1234567890"></form>"#;

        assert_eq!(scrape_fbzx(html).as_deref(), Some("-1234567890"));
        assert_eq!(scrape_fbzx("<form></form>"), None);
    }

    #[test]
    fn test_payload_fields() {
        let submission = validate(&json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "app": "LETS ELEVATOR",
            "message": "Great app!"
        }))
        .unwrap();

        let plain = build_payload(&submission, None);
        assert_eq!(
            plain,
            vec![
                (ENTRY_NAME, "Jane Doe".to_string()),
                (ENTRY_EMAIL, "jane@example.com".to_string()),
                (ENTRY_APP, "LETS ELEVATOR".to_string()),
                (ENTRY_MESSAGE, "Great app!".to_string()),
            ]
        );

        let with_token = build_payload(&submission, Some("42"));
        assert_eq!(with_token.len(), 7);
        assert!(with_token.contains(&("fbzx", "42".to_string())));
    }
}
