use crate::{FormErrors, FormField, FormValues, UnknownFieldError};
use log::debug;
use serde::{Deserialize, Serialize};

/// Where the form is in its submit lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormPhase {
    /// No submit attempt yet
    Initial,
    /// Submitted at least once, last attempt reported errors
    Invalid,
    /// Submitted and the last attempt reported no errors
    Success,
}

/// Holds the values, errors and submitted flag of one login form session.
///
/// Pure storage: setters never validate. Errors only change through
/// [`FormState::set_errors`], so they go stale while the user edits after a
/// failed submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    values: FormValues,
    errors: FormErrors,
    submitted: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: FormValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Merge a new value for one field into the current values
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        debug!("form field updated: {}", field);
        self.values.set(field, value);
    }

    /// Same as [`FormState::set_field`], keyed by the input's `name` attribute
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownFieldError> {
        let field = name.parse::<FormField>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Replace the whole error record
    pub fn set_errors(&mut self, errors: FormErrors) {
        self.errors = errors;
    }

    /// Record that a submit was attempted. There is no way back to false.
    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    pub fn phase(&self) -> FormPhase {
        match (self.submitted, self.errors.is_empty()) {
            (false, _) => FormPhase::Initial,
            (true, true) => FormPhase::Success,
            (true, false) => FormPhase::Invalid,
        }
    }

    /// The success view is shown iff this is true
    pub fn is_success(&self) -> bool {
        self.phase() == FormPhase::Success
    }
}
