//! # Catalog
//!
//! Static data shared by the contact server and its clients.
//!
//! - [`apps`]: the per-locale app menu and the set of labels a contact
//!   submission may name
//! - [`fields`]: limits and format rules for the contact form fields
//! - [`payloads`]: the JSON bodies exchanged with `/api/recaptcha` and
//!   `/api/submit-form`

pub mod apps;
pub mod fields;
pub mod payloads;

pub use apps::{Locale, allowed_apps, is_allowed_app, menu_labels};
