use super::*;
use crate::state::booking::VisitBooking;
use crate::state::contact::{ContactField, ContactForm};

fn filled_contact() -> FormState<ContactForm> {
    let mut form = FormState::<ContactForm>::new();
    form.edit(ContactField::Name, "Ada Lovelace".to_owned());
    form.edit(ContactField::Email, "ada@example.com".to_owned());
    form.edit(ContactField::Category, "general".to_owned());
    form.edit(ContactField::Subject, "Opening hours".to_owned());
    form.edit(ContactField::Message, "When do you open on holidays?".to_owned());
    form
}

// =============================================================
// Field rules
// =============================================================

#[test]
fn require_rejects_whitespace_only() {
    assert_eq!(
        require("   \t", "Name is required"),
        Err(ValidationError::MissingRequiredField { message: "Name is required" })
    );
    assert_eq!(require(" x ", "Name is required"), Ok(()));
}

#[test]
fn check_email_requires_value_first() {
    let err = check_email("  ").unwrap_err();
    assert_eq!(err.to_string(), "Email is required");
}

#[test]
fn check_email_rejects_missing_dot_in_domain() {
    let err = check_email("foo@bar").unwrap_err();
    assert_eq!(err, ValidationError::InvalidFormat { field: "email" });
    assert_eq!(err.to_string(), "Please enter a valid email");
}

#[test]
fn check_email_rejects_missing_at_or_local_part() {
    assert!(check_email("foo.bar.com").is_err());
    assert!(check_email("@bar.com").is_err());
    assert!(check_email("foo@.com").is_err());
}

#[test]
fn check_email_accepts_simple_addresses() {
    for ok in ["a@b.c", "first.last@museum.example.org", "x+tag@mail.co"] {
        assert_eq!(check_email(ok), Ok(()), "{ok}");
    }
}

#[test]
fn check_min_chars_counts_trimmed_characters() {
    assert!(check_min_chars("  short  ", 10, "Message").is_err());
    assert!(check_min_chars("exactly 10", 10, "Message").is_ok());
    let err = check_min_chars("tiny", 10, "Message").unwrap_err();
    assert_eq!(err.to_string(), "Message must be at least 10 characters");
}

#[test]
fn check_min_chars_counts_chars_not_bytes() {
    assert!(check_min_chars("éééééééééé", 10, "Message").is_ok());
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn new_form_is_idle_with_blank_values() {
    let form = FormState::<ContactForm>::new();
    assert_eq!(form.status, FormStatus::Idle);
    assert_eq!(form.values, ContactForm::default());
    assert_eq!(form, FormState::default());
}

#[test]
fn default_is_available_for_booking_forms_too() {
    let form: FormState<VisitBooking> = FormState::default();
    assert_eq!(form.status, FormStatus::Idle);
    assert_eq!(form.values.visitors, "1");
}

#[test]
fn rejected_submit_stores_errors_and_stays_out_of_submitting() {
    let mut form = FormState::<ContactForm>::new();
    assert_eq!(form.submit(), SubmitAttempt::Rejected);
    assert!(!form.is_submitting());
    assert!(matches!(form.status, FormStatus::Invalid(ref e) if !e.is_empty()));
}

#[test]
fn edit_clears_only_that_fields_error() {
    let mut form = FormState::<ContactForm>::new();
    form.submit();
    assert!(form.error(ContactField::Name).is_some());
    assert!(form.error(ContactField::Email).is_some());

    form.edit(ContactField::Name, String::new());
    assert!(form.error(ContactField::Name).is_none());
    assert!(form.error(ContactField::Email).is_some());
}

#[test]
fn edit_clears_error_even_when_new_value_is_invalid() {
    let mut form = filled_contact();
    form.edit(ContactField::Email, "nope".to_owned());
    form.submit();
    assert_eq!(form.error_message(ContactField::Email).as_deref(), Some("Please enter a valid email"));

    form.edit(ContactField::Email, "still nope".to_owned());
    assert_eq!(form.error(ContactField::Email), None);
}

#[test]
fn clearing_last_error_returns_to_idle() {
    let mut form = filled_contact();
    form.edit(ContactField::Subject, String::new());
    form.submit();
    form.edit(ContactField::Subject, "Hello".to_owned());
    assert_eq!(form.status, FormStatus::Idle);
}

#[test]
fn clean_submit_goes_submitting_then_confirmed_then_blank() {
    let mut form = filled_contact();
    assert_eq!(form.submit(), SubmitAttempt::Started);
    assert!(form.is_submitting());

    form.confirm();
    assert!(form.is_confirmed());
    assert_eq!(form.values.name, "Ada Lovelace");

    form.reset();
    assert_eq!(form, FormState::new());
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut form = filled_contact();
    form.submit();
    assert_eq!(form.submit(), SubmitAttempt::InFlight);
    assert!(form.is_submitting());
}

#[test]
fn confirm_and_reset_ignore_wrong_phase() {
    let mut form = filled_contact();
    form.confirm();
    assert_eq!(form.status, FormStatus::Idle);

    form.submit();
    form.reset();
    assert!(form.is_submitting(), "reset must not cancel an in-flight send");
}

#[test]
fn errors_are_not_reported_outside_invalid_phase() {
    let mut form = filled_contact();
    form.submit();
    assert_eq!(form.error(ContactField::Name), None);
}

#[test]
fn delays_match_simulated_timings() {
    assert_eq!(SUBMIT_DELAY, Duration::from_secs(2));
    assert_eq!(RESET_DELAY, Duration::from_secs(3));
}
