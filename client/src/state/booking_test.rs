use super::*;
use crate::state::form::{FormState, SubmitAttempt};

fn valid() -> VisitBooking {
    VisitBooking {
        name: "Prof. David Kim".to_owned(),
        email: "dkim@university.edu".to_owned(),
        phone: "+1 555 0100".to_owned(),
        date: "2026-11-02".to_owned(),
        time: "14:00".to_owned(),
        ..VisitBooking::default()
    }
}

#[test]
fn default_has_one_visitor_and_blank_fields() {
    let booking = VisitBooking::default();
    assert_eq!(booking.visitors, "1");
    assert!(booking.name.is_empty());
    assert!(booking.message.is_empty());
}

#[test]
fn all_empty_flags_required_fields_only() {
    let fields: Vec<_> = VisitBooking::default().validate().into_keys().collect();
    assert_eq!(
        fields,
        vec![BookingField::Name, BookingField::Email, BookingField::Phone, BookingField::Date, BookingField::Time]
    );
}

#[test]
fn required_messages_match_copy() {
    let errors = VisitBooking::default().validate();
    assert_eq!(errors[&BookingField::Phone].to_string(), "Phone number is required");
    assert_eq!(errors[&BookingField::Date].to_string(), "Visit date is required");
    assert_eq!(errors[&BookingField::Time].to_string(), "Visit time is required");
}

#[test]
fn message_is_optional() {
    assert!(valid().validate().is_empty());
    let mut form = FormState { values: valid(), ..FormState::new() };
    assert_eq!(form.submit(), SubmitAttempt::Started);
}

#[test]
fn reset_restores_default_visitor_count() {
    let mut form = FormState { values: valid(), ..FormState::new() };
    form.edit(BookingField::Visitors, "6".to_owned());
    form.submit();
    form.confirm();
    form.reset();
    assert_eq!(form.values, VisitBooking::default());
}

#[test]
fn bad_email_is_flagged() {
    let booking = VisitBooking { email: "dkim at university".to_owned(), ..valid() };
    let errors = booking.validate();
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key(&BookingField::Email));
}
