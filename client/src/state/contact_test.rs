use super::*;
use crate::state::form::{FormState, FormStatus, SubmitAttempt, ValidationError};

fn valid() -> ContactForm {
    ContactForm {
        name: "Jennifer Walsh".to_owned(),
        email: "jen@example.com".to_owned(),
        phone: String::new(),
        subject: "Group visit".to_owned(),
        category: ContactCategory::Group.value().to_owned(),
        message: "We are twelve people arriving Saturday.".to_owned(),
    }
}

#[test]
fn all_empty_yields_exactly_five_errors() {
    let errors = ContactForm::default().validate();
    let fields: Vec<_> = errors.keys().copied().collect();
    assert_eq!(
        fields,
        vec![
            ContactField::Name,
            ContactField::Email,
            ContactField::Category,
            ContactField::Subject,
            ContactField::Message,
        ]
    );
}

#[test]
fn all_empty_blocks_submission() {
    let mut form = FormState::<ContactForm>::new();
    assert_eq!(form.submit(), SubmitAttempt::Rejected);
    assert!(matches!(form.status, FormStatus::Invalid(ref e) if e.len() == 5));
}

#[test]
fn empty_messages_match_copy() {
    let errors = ContactForm::default().validate();
    let text = |f| errors.get(&f).map(ToString::to_string);
    assert_eq!(text(ContactField::Name).as_deref(), Some("Name is required"));
    assert_eq!(text(ContactField::Email).as_deref(), Some("Email is required"));
    assert_eq!(text(ContactField::Category).as_deref(), Some("Please select a category"));
    assert_eq!(text(ContactField::Subject).as_deref(), Some("Subject is required"));
    assert_eq!(text(ContactField::Message).as_deref(), Some("Message is required"));
}

#[test]
fn invalid_email_is_the_only_error() {
    let form = ContactForm { email: "foo@bar".to_owned(), ..valid() };
    let errors = form.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(&ContactField::Email), Some(&ValidationError::InvalidFormat { field: "email" }));
}

#[test]
fn short_message_is_too_short() {
    let form = ContactForm { message: "  hi there ".to_owned(), ..valid() };
    let errors = form.validate();
    assert_eq!(
        errors.get(&ContactField::Message),
        Some(&ValidationError::TooShort { field: "Message", min: MESSAGE_MIN_CHARS })
    );
}

#[test]
fn phone_is_optional() {
    assert!(valid().validate().is_empty());
}

#[test]
fn category_values_are_distinct_and_labelled() {
    let values: std::collections::HashSet<_> = ContactCategory::ALL.iter().map(|c| c.value()).collect();
    assert_eq!(values.len(), ContactCategory::ALL.len());
    assert_eq!(ContactCategory::Group.label(), "Group Bookings");
    assert!(ContactCategory::ALL.iter().all(|c| !c.label().is_empty()));
}

#[test]
fn set_value_writes_matching_field() {
    let mut form = ContactForm::default();
    form.set_value(ContactField::Subject, "Press".to_owned());
    assert_eq!(form.subject, "Press");
    assert_eq!(form.value(ContactField::Subject), "Press");
    assert_eq!(form.value(ContactField::Name), "");
}
