use std::{env, fmt::Display, fs::read_to_string, str::FromStr, time::Duration};

use anyhow::{Result, anyhow};
use tracing::{info, warn};

pub const DEFAULT_RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";
pub const DEFAULT_FORMS_BASE_URL: &str = "https://docs.google.com/forms";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub development: bool,
    pub outbound_timeout: Duration,
    pub recaptcha_verify_url: String,
    pub forms_base_url: String,
    pub recaptcha_secret: Option<String>,
    pub form_id: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let app_env: String = try_load("APP_ENV", "production")?;

        Ok(Self {
            port: try_load("RUST_PORT", "3000")?,
            development: app_env.eq_ignore_ascii_case("development"),
            outbound_timeout: Duration::from_secs(try_load("OUTBOUND_TIMEOUT_SECS", "10")?),
            recaptcha_verify_url: try_load("RECAPTCHA_VERIFY_URL", DEFAULT_RECAPTCHA_VERIFY_URL)?,
            forms_base_url: try_load("FORMS_BASE_URL", DEFAULT_FORMS_BASE_URL)?,
            recaptcha_secret: read_secret("RECAPTCHA_SECRET_KEY"),
            form_id: read_secret("GOOGLE_FORM_ID"),
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| anyhow!("Invalid {key} value: {e}"))
}

/// Secrets come from the environment first, then from a mounted
/// `/run/secrets/<NAME>` file. A missing secret is reported per request.
fn read_secret(secret_name: &str) -> Option<String> {
    if let Some(value) = var(secret_name) {
        return Some(value.trim().to_string());
    }

    let path = format!("/run/secrets/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {secret_name} from env or {path}: {e}");
        })
        .ok()
        .filter(|s| !s.is_empty())
}
