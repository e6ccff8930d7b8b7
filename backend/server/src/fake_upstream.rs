//! In-process stand-in for the verification service and the forms backend,
//! used by the test suites of this workspace.
//!
//! - `POST /recaptcha/api/siteverify` accepts exactly the configured tokens
//! - `GET /forms/d/e/{id}/viewform` serves a page with an `fbzx` input unless
//!   [`FakeUpstream::set_fbzx`] cleared it
//! - `POST /forms/d/e/{id}/formResponse` and `/forms/d/{id}/formResponse`
//!   record the form and answer with the configured status, after the
//!   configured delay
use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde_json::json;
use tokio::{net::TcpListener, sync::Mutex};

use crate::config::Config;

pub const VALID_TOKEN: &str = "valid";
pub const FBZX: &str = "-4242424242424242424";
pub const PUBLISHED_FORM_ID: &str = "1FAIpQLSfakeform";
pub const EDITOR_FORM_ID: &str = "1editorfakeform";

#[derive(Debug)]
struct Inner {
    valid_tokens: Vec<String>,
    fbzx: Option<String>,
    form_status: StatusCode,
    form_delay: Duration,
    verifications: Vec<HashMap<String, String>>,
    view_fetches: usize,
    submissions: Vec<HashMap<String, String>>,
}

#[derive(Clone, Debug)]
pub struct FakeUpstream {
    inner: Arc<Mutex<Inner>>,
    pub addr: SocketAddr,
}

impl FakeUpstream {
    pub async fn spawn() -> std::io::Result<Self> {
        let inner = Arc::new(Mutex::new(Inner {
            valid_tokens: vec![VALID_TOKEN.to_string()],
            fbzx: Some(FBZX.to_string()),
            form_status: StatusCode::OK,
            form_delay: Duration::ZERO,
            verifications: Vec::new(),
            view_fetches: 0,
            submissions: Vec::new(),
        }));

        let app = Router::new()
            .route("/recaptcha/api/siteverify", post(siteverify))
            .route("/forms/d/e/{id}/viewform", get(viewform))
            .route("/forms/d/e/{id}/formResponse", post(form_response))
            .route("/forms/d/{id}/formResponse", post(form_response))
            .with_state(inner.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move { axum::serve(listener, app).await });

        Ok(Self { inner, addr })
    }

    /// Server config pointing at this fake, with both secrets set.
    pub fn config(&self, form_id: &str) -> Config {
        Config {
            port: 0,
            development: true,
            outbound_timeout: Duration::from_secs(5),
            recaptcha_verify_url: format!("http://{}/recaptcha/api/siteverify", self.addr),
            forms_base_url: format!("http://{}/forms", self.addr),
            recaptcha_secret: Some("test-secret".to_string()),
            form_id: Some(form_id.to_string()),
        }
    }

    pub async fn set_form_status(&self, status: StatusCode) {
        self.inner.lock().await.form_status = status;
    }

    /// Holds every `formResponse` answer back by `delay`.
    pub async fn set_form_delay(&self, delay: Duration) {
        self.inner.lock().await.form_delay = delay;
    }

    pub async fn set_fbzx(&self, fbzx: Option<&str>) {
        self.inner.lock().await.fbzx = fbzx.map(str::to_string);
    }

    pub async fn verifications(&self) -> Vec<HashMap<String, String>> {
        self.inner.lock().await.verifications.clone()
    }

    pub async fn view_fetches(&self) -> usize {
        self.inner.lock().await.view_fetches
    }

    pub async fn submissions(&self) -> Vec<HashMap<String, String>> {
        self.inner.lock().await.submissions.clone()
    }
}

async fn siteverify(
    State(inner): State<Arc<Mutex<Inner>>>,
    Form(form): Form<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    let mut inner = inner.lock().await;
    let success = form
        .get("response")
        .is_some_and(|token| inner.valid_tokens.contains(token));
    inner.verifications.push(form);

    if success {
        Json(json!({ "success": true, "score": 0.9, "action": "submit_form" }))
    } else {
        Json(json!({ "success": false, "error-codes": ["invalid-input-response"] }))
    }
}

async fn viewform(State(inner): State<Arc<Mutex<Inner>>>) -> Html<String> {
    let mut inner = inner.lock().await;
    inner.view_fetches += 1;

    let hidden = inner
        .fbzx
        .as_deref()
        .map(|token| format!(r#"<input type="hidden" name="fbzx" value="{token}">"#))
        .unwrap_or_default();

    Html(format!("<html><body><form>{hidden}</form></body></html>"))
}

async fn form_response(
    State(inner): State<Arc<Mutex<Inner>>>,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let delay = inner.lock().await.form_delay;
    tokio::time::sleep(delay).await;

    let mut inner = inner.lock().await;
    inner.submissions.push(form);

    (inner.form_status, Html("<html>Thanks</html>"))
}
