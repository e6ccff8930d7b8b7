//! Submit orchestration.
//!
//! Three sequential steps, each able to stop the chain:
//! 1. token from the [`TokenProvider`]
//! 2. `POST /api/recaptcha`
//! 3. `POST /api/submit-form`
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use catalog::{
    Locale,
    payloads::{RelayResponse, SUBMIT_ACTION, VerifyRequest},
};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    alert::Alert,
    state::{Event, FormState},
};

pub const REDIRECT_DELAY: Duration = Duration::from_millis(3000);

/// Source of reCAPTCHA assertion tokens.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self, action: &str) -> Result<String>;
}

pub trait Navigator {
    fn navigate(&self, path: &str);
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("reCAPTCHA unavailable: {0}")]
    TokenUnavailable(anyhow::Error),

    #[error("reCAPTCHA returned an empty token")]
    EmptyToken,

    #[error("verification refused with {0}")]
    VerificationFailed(StatusCode),

    #[error("relay refused: {0}")]
    Rejected(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SubmitError {
    /// What the user gets to read. Only the relay's own message is shown
    /// verbatim.
    pub fn alert(&self) -> Alert {
        match self {
            SubmitError::Rejected(message) => Alert::Rejected(message.clone()),
            _ => Alert::Error,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
    pub delay: Duration,
}

impl Redirect {
    pub async fn follow<N: Navigator>(self, navigator: &N) {
        tokio::time::sleep(self.delay).await;
        navigator.navigate(&self.path);
    }
}

#[derive(Debug)]
pub struct SubmitOutcome {
    pub state: FormState,
    pub redirect: Option<Redirect>,
    pub error: Option<SubmitError>,
}

pub struct Controller<P> {
    provider: P,
    http: Client,
    base_url: String,
    locale: Locale,
}

impl<P: TokenProvider> Controller<P> {
    pub fn new(provider: P, base_url: &str, locale: Locale) -> Self {
        Self::with_client(provider, Client::new(), base_url, locale)
    }

    pub fn with_client(provider: P, http: Client, base_url: &str, locale: Locale) -> Self {
        Self {
            provider,
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            locale,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub async fn submit(&self, state: FormState) -> SubmitOutcome {
        if !state.can_submit() {
            debug!("Submit ignored, draft not submittable");
            return SubmitOutcome {
                state,
                redirect: None,
                error: None,
            };
        }

        match self.send(&state).await {
            Ok(()) => {
                info!("Contact form sent");
                SubmitOutcome {
                    state: state.reduce(Event::Sent),
                    redirect: Some(Redirect {
                        path: self.locale.home_path(),
                        delay: REDIRECT_DELAY,
                    }),
                    error: None,
                }
            }
            Err(error) => {
                warn!("Contact form not sent: {error}");
                SubmitOutcome {
                    state: state.reduce(Event::Failed(error.alert())),
                    redirect: None,
                    error: Some(error),
                }
            }
        }
    }

    async fn send(&self, state: &FormState) -> Result<(), SubmitError> {
        let token = self
            .provider
            .token(SUBMIT_ACTION)
            .await
            .map_err(SubmitError::TokenUnavailable)?;

        if token.is_empty() {
            return Err(SubmitError::EmptyToken);
        }

        let verified = self
            .http
            .post(format!("{}/api/recaptcha", self.base_url))
            .json(&VerifyRequest { token })
            .send()
            .await?;

        if !verified.status().is_success() {
            return Err(SubmitError::VerificationFailed(verified.status()));
        }

        let relayed = self
            .http
            .post(format!("{}/api/submit-form", self.base_url))
            .json(&state.draft.to_submission())
            .send()
            .await?
            .json::<RelayResponse>()
            .await?;

        if relayed.success {
            Ok(())
        } else {
            Err(SubmitError::Rejected(relayed.message))
        }
    }
}
