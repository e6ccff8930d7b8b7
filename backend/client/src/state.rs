use catalog::Locale;

use crate::{
    alert::{Alert, derive_alert},
    draft::{Draft, Field},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    FieldChanged(Field, String),
    Failed(Alert),
    Sent,
}

/// One contact form session. Every transition goes through [`FormState::reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub draft: Draft,
    pub submitted: bool,
    pub alert: Alert,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            draft: Draft::default(),
            submitted: false,
            alert: Alert::FillRequired,
        }
    }
}

impl FormState {
    pub fn reduce(self, event: Event) -> Self {
        match event {
            Event::FieldChanged(field, value) => {
                let draft = self.draft.with(field, value);
                let alert = derive_alert(&draft, self.submitted);

                Self { draft, alert, ..self }
            }
            Event::Failed(alert) => Self { alert, ..self },
            Event::Sent => Self {
                draft: Draft::default(),
                submitted: true,
                alert: Alert::Sent,
            },
        }
    }

    pub fn can_submit(&self) -> bool {
        self.draft.is_submittable()
    }

    pub fn alert_message(&self, locale: Locale) -> String {
        self.alert.message(locale)
    }
}
