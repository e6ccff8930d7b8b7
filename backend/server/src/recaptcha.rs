//! # reCAPTCHA
//!
//! One form-encoded POST of `secret` + `response` per submission. The
//! verification service answers with JSON; only `success` decides trust,
//! the rest is kept for logs.
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SiteVerify {
    pub success: bool,
    #[serde(default)]
    pub score: Option<f32>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, rename = "error-codes")]
    pub error_codes: Vec<String>,
}

pub async fn verify_token(
    client: &Client,
    verify_url: &str,
    secret: &str,
    token: &str,
) -> Result<SiteVerify, reqwest::Error> {
    client
        .post(verify_url)
        .form(&[("secret", secret), ("response", token)])
        .send()
        .await?
        .json::<SiteVerify>()
        .await
}
