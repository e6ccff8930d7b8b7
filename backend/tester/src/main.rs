//! Sends one contact form through a running server, the same way the page does.
//!
//! ```sh
//! RUST_LOG=client=debug cargo run -p tester -- --token "$TOKEN" "Jane Doe" jane@example.com "LETS ELEVATOR" "Great app!"
//! ```
use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use catalog::{Locale, menu_labels};
use clap::Parser;
use client::{Controller, Event, Field, FormState, TokenProvider};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    name: String,

    email: String,

    app: String,

    message: String,

    /// reCAPTCHA token, e.g. from a browser session
    #[arg(long)]
    token: String,

    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    #[arg(long, default_value = "ja")]
    locale: Locale,
}

struct FixedToken(String);

#[async_trait]
impl TokenProvider for FixedToken {
    async fn token(&self, _action: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}

fn init_logging() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(|e| anyhow!(e))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let args = Args::parse();
    let locale = args.locale;

    let state = [
        (Field::Name, args.name),
        (Field::Email, args.email),
        (Field::App, args.app),
        (Field::Message, args.message),
    ]
    .into_iter()
    .fold(FormState::default(), |state, (field, value)| {
        state.reduce(Event::FieldChanged(field, value))
    });

    println!("Draft: {}", state.alert_message(locale));

    if !state.can_submit() {
        println!("Apps: {}", menu_labels(locale).join(", "));
        bail!("draft is not submittable");
    }

    let controller = Controller::new(FixedToken(args.token), &args.url, locale);
    let outcome = controller.submit(state).await;

    println!("Result: {}", outcome.state.alert_message(locale));

    if let Some(error) = outcome.error {
        bail!(error);
    }

    if let Some(redirect) = outcome.redirect {
        println!("Redirect to {} after {:?}", redirect.path, redirect.delay);
    }

    Ok(())
}
