//! Form lifecycle shared by the contact and visit-booking forms.
//!
//! DESIGN
//! ======
//! A form is a value model (`FormModel`) plus a single `FormStatus`:
//! `Idle -> Invalid(errors) | Submitting -> Confirmed -> Idle`. Keeping the
//! phase in one enum rules out combinations such as "submitting and
//! confirmed" that separate booleans would allow.
//!
//! Validation runs only on a submit attempt. Editing a field afterwards
//! drops that field's error without re-validating.
//!
//! Overlapping sends are refused by the state machine itself: a submit
//! while `Submitting` returns `SubmitAttempt::InFlight` and changes nothing,
//! independent of whether the button is disabled.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

/// Simulated network latency before a submission is confirmed.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);
/// How long the confirmation stays visible before the form resets.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

// Unanchored on purpose: any `x@y.z` run inside the value is accepted.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

/// A field-level validation failure. `Display` is the inline message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{message}")]
    MissingRequiredField { message: &'static str },
    #[error("Please enter a valid {field}")]
    InvalidFormat { field: &'static str },
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
}

/// Failures keyed by field. Submission proceeds only when empty.
pub type FieldErrors<F> = BTreeMap<F, ValidationError>;

/// Fail when `value` is blank after trimming.
pub fn require(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingRequiredField { message })
    } else {
        Ok(())
    }
}

/// Required check, then the `local@domain.tld` shape check.
pub fn check_email(value: &str) -> Result<(), ValidationError> {
    require(value, "Email is required")?;
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat { field: "email" })
    }
}

/// Fail when the trimmed value has fewer than `min` characters.
pub fn check_min_chars(value: &str, min: usize, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().chars().count() < min {
        Err(ValidationError::TooShort { field, min })
    } else {
        Ok(())
    }
}

/// Record `result` against `field` if it failed.
pub fn record<F: Ord>(errors: &mut FieldErrors<F>, field: F, result: Result<(), ValidationError>) {
    if let Err(err) = result {
        errors.insert(field, err);
    }
}

/// Field values of one form plus its validation rules.
pub trait FormModel: Clone + Default + Debug {
    type Field: Copy + Ord + Debug;

    fn value(&self, field: Self::Field) -> &str;

    fn set_value(&mut self, field: Self::Field, value: String);

    /// Run every rule and collect all failures.
    fn validate(&self) -> FieldErrors<Self::Field>;
}

/// Phase of a form's submit flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus<F: Ord> {
    Idle,
    /// Last submit attempt failed; errors shrink as fields are edited.
    Invalid(FieldErrors<F>),
    Submitting,
    Confirmed,
}

impl<F: Ord> Default for FormStatus<F> {
    fn default() -> Self {
        Self::Idle
    }
}

/// Result of pressing submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation passed; the caller should start the simulated send.
    Started,
    /// Validation failed; errors are now on display.
    Rejected,
    /// A send is already in flight.
    InFlight,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState<M: FormModel> {
    pub values: M,
    pub status: FormStatus<M::Field>,
}

// Hand-written: a derive would demand `M::Field: Default`.
impl<M: FormModel> Default for FormState<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: FormModel> FormState<M> {
    #[must_use]
    pub fn new() -> Self {
        Self { values: M::default(), status: FormStatus::Idle }
    }

    #[must_use]
    pub fn value(&self, field: M::Field) -> &str {
        self.values.value(field)
    }

    /// Store a new value and clear that field's displayed error.
    pub fn edit(&mut self, field: M::Field, value: String) {
        self.values.set_value(field, value);
        if let FormStatus::Invalid(errors) = &mut self.status {
            errors.remove(&field);
            if errors.is_empty() {
                self.status = FormStatus::Idle;
            }
        }
    }

    #[must_use]
    pub fn error(&self, field: M::Field) -> Option<&ValidationError> {
        match &self.status {
            FormStatus::Invalid(errors) => errors.get(&field),
            _ => None,
        }
    }

    /// Message to show beside `field`, if any.
    #[must_use]
    pub fn error_message(&self, field: M::Field) -> Option<String> {
        self.error(field).map(ToString::to_string)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.status, FormStatus::Submitting)
    }

    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        matches!(self.status, FormStatus::Confirmed)
    }

    /// Validate and, when clean, enter `Submitting`.
    pub fn submit(&mut self) -> SubmitAttempt {
        if self.is_submitting() {
            return SubmitAttempt::InFlight;
        }
        let errors = self.values.validate();
        if errors.is_empty() {
            self.status = FormStatus::Submitting;
            SubmitAttempt::Started
        } else {
            self.status = FormStatus::Invalid(errors);
            SubmitAttempt::Rejected
        }
    }

    /// `Submitting -> Confirmed`. No-op from any other phase.
    pub fn confirm(&mut self) {
        if self.is_submitting() {
            self.status = FormStatus::Confirmed;
        }
    }

    /// `Confirmed -> Idle` with every field back at its initial value.
    pub fn reset(&mut self) {
        if self.is_confirmed() {
            *self = Self::new();
        }
    }
}
