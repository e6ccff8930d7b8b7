//! # Contact Form Client
//!
//! Client logic behind the contact page. A UI layer owns a [`FormState`],
//! feeds it [`Event`]s as the user types, and hands it to a [`Controller`]
//! when the user presses submit.
//!
//! ## Payloads
//!
//! To `/api/recaptcha`
//! - JSON `{ token }`, token from reCAPTCHA for the `submit_form` action
//!
//! To `/api/submit-form`
//! - JSON `{ name, email, app, message }`, sent only after the token checked out
//!
//! ## Flow
//!
//! - Every keystroke updates the draft and recomputes the alert
//! - Submit is enabled only for a submittable draft
//! - Token, then verification, then relay; the first failure stops the chain
//! - Success clears the draft and sends the user home after 3 seconds
//! - Failure keeps the draft so the user can press submit again

pub mod alert;
pub mod controller;
pub mod draft;
pub mod state;

pub use alert::Alert;
pub use controller::{Controller, Navigator, Redirect, SubmitError, SubmitOutcome, TokenProvider};
pub use draft::{Draft, Field};
pub use state::{Event, FormState};
