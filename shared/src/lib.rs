use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod config;
pub mod session;
pub mod state;
pub mod validation;

pub use config::LoginFormConfig;
pub use session::{apply_submit, schedule_on_success, submit, Scheduler};
pub use state::{FormPhase, FormState};
pub use validation::validate;

/// One of the three inputs on the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Username,
    Email,
    Password,
}

impl FormField {
    /// All fields in the order they are rendered
    pub const ALL: [FormField; 3] = [FormField::Username, FormField::Email, FormField::Password];

    /// The `name` attribute used by the matching input element
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Username => "username",
            FormField::Email => "email",
            FormField::Password => "password",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = UnknownFieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "username" => Ok(FormField::Username),
            "email" => Ok(FormField::Email),
            "password" => Ok(FormField::Password),
            other => Err(UnknownFieldError(other.to_string())),
        }
    }
}

/// Raised when an input event carries a name that is not a login form field
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown form field: {0:?}")]
pub struct UnknownFieldError(pub String);

/// Current values of the login form inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormValues {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl FormValues {
    pub fn new(username: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Username => &self.username,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    /// Replace one field, leaving the other two untouched
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Username => &mut self.username,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
        };
        *slot = value.into();
    }
}

/// Validation messages keyed by field. `None` means the field is valid.
///
/// Serializes with absent keys omitted, so a record without errors is `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Username => self.username.as_deref(),
            FormField::Email => self.email.as_deref(),
            FormField::Password => self.password.as_deref(),
        }
    }

    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        let message = Some(message.into());
        match field {
            FormField::Username => self.username = message,
            FormField::Email => self.email = message,
            FormField::Password => self.password = message,
        }
    }

    /// Populated `(field, message)` pairs in render order
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> + '_ {
        FormField::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|message| (field, message)))
    }

    /// Number of fields carrying a message
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
