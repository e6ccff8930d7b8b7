use catalog::{fields::is_valid_email, payloads::Submission};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    App,
    Message,
}

/// Not-yet-submitted contact form fields, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub app: String,
    pub message: String,
}

impl Draft {
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();

        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::App => self.app = value,
            Field::Message => self.message = value,
        }

        self
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::App => &self.app,
            Field::Message => &self.message,
        }
    }

    pub fn is_filled(&self, field: Field) -> bool {
        !self.get(field).trim().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        [Field::Name, Field::Email, Field::App, Field::Message]
            .into_iter()
            .all(|field| !self.is_filled(field))
    }

    /// Gates the submit button.
    pub fn is_submittable(&self) -> bool {
        self.is_filled(Field::Name)
            && self.is_filled(Field::Email)
            && self.is_filled(Field::App)
            && self.is_filled(Field::Message)
            && is_valid_email(&self.email)
    }

    pub fn to_submission(&self) -> Submission {
        Submission {
            name: self.name.clone(),
            email: self.email.clone(),
            app: self.app.clone(),
            message: self.message.clone(),
        }
    }
}
