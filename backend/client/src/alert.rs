//! Alert line under the contact form.
//!
//! Only one hint shows at a time, walking the user through the form field
//! by field.
use catalog::{Locale, fields::is_valid_email};

use crate::draft::{Draft, Field};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Alert {
    Sent,
    FillRequired,
    MissingName,
    MissingEmail,
    InvalidEmail,
    MissingApp,
    MissingMessage,
    Ready,
    /// Token, verification or transport failure.
    Error,
    /// Relay refused the submission with its own message.
    Rejected(String),
}

/// Priority: sent, all empty, name, email, email format, app, message, ready.
pub fn derive_alert(draft: &Draft, submitted: bool) -> Alert {
    if submitted {
        Alert::Sent
    } else if draft.is_empty() {
        Alert::FillRequired
    } else if !draft.is_filled(Field::Name) {
        Alert::MissingName
    } else if !draft.is_filled(Field::Email) {
        Alert::MissingEmail
    } else if !is_valid_email(&draft.email) {
        Alert::InvalidEmail
    } else if !draft.is_filled(Field::App) {
        Alert::MissingApp
    } else if !draft.is_filled(Field::Message) {
        Alert::MissingMessage
    } else {
        Alert::Ready
    }
}

impl Alert {
    pub fn is_error(&self) -> bool {
        matches!(self, Alert::Error | Alert::Rejected(_))
    }

    pub fn message(&self, locale: Locale) -> String {
        let text = match (self, locale) {
            (Alert::Rejected(message), _) => return message.clone(),
            (Alert::Sent, Locale::Ja) => "お問い合わせを送信しました。ありがとうございました。",
            (Alert::Sent, Locale::En) => "Your message has been sent. Thank you!",
            (Alert::FillRequired, Locale::Ja) => "必須項目を入力してください。",
            (Alert::FillRequired, Locale::En) => "Please fill in the required fields.",
            (Alert::MissingName, Locale::Ja) => "お名前を入力してください。",
            (Alert::MissingName, Locale::En) => "Please enter your name.",
            (Alert::MissingEmail, Locale::Ja) => "メールアドレスを入力してください。",
            (Alert::MissingEmail, Locale::En) => "Please enter your email address.",
            (Alert::InvalidEmail, Locale::Ja) => "正しいメールアドレスを入力してください。",
            (Alert::InvalidEmail, Locale::En) => "Please enter a valid email address.",
            (Alert::MissingApp, Locale::Ja) => "アプリを選択してください。",
            (Alert::MissingApp, Locale::En) => "Please select an app.",
            (Alert::MissingMessage, Locale::Ja) => "お問い合わせ内容を入力してください。",
            (Alert::MissingMessage, Locale::En) => "Please enter your message.",
            (Alert::Ready, Locale::Ja) => "送信できます。",
            (Alert::Ready, Locale::En) => "Ready to submit.",
            (Alert::Error, Locale::Ja) => "エラーが発生しました。時間をおいて再度お試しください。",
            (Alert::Error, Locale::En) => "An error occurred. Please try again later.",
        };

        text.to_string()
    }
}
