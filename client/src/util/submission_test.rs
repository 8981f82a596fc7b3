use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::state::booking::{BookingField, VisitBooking};
use crate::state::form::{FormStatus, SubmitAttempt};

fn accepted_booking() -> FormState<VisitBooking> {
    let mut form = FormState::<VisitBooking>::new();
    form.edit(BookingField::Name, "Maria Santos".to_owned());
    form.edit(BookingField::Email, "maria@example.com".to_owned());
    form.edit(BookingField::Phone, "555-0199".to_owned());
    form.edit(BookingField::Date, "2026-12-01".to_owned());
    form.edit(BookingField::Time, "11:00".to_owned());
    assert_eq!(form.submit(), SubmitAttempt::Started);
    form
}

#[test]
fn booking_confirms_then_reverts_to_blank_fields() {
    let state = RefCell::new(accepted_booking());
    let seen = RefCell::new(Vec::new());

    block_on(run_simulated_submission::<VisitBooking, _, _, _>(
        |step| step(&mut state.borrow_mut()),
        |delay| {
            seen.borrow_mut().push((delay, state.borrow().status.clone()));
            std::future::ready(())
        },
    ));

    assert_eq!(
        seen.into_inner(),
        vec![(SUBMIT_DELAY, FormStatus::Submitting), (RESET_DELAY, FormStatus::Confirmed)]
    );
    assert_eq!(state.into_inner(), FormState::new());
}

#[test]
fn steps_do_nothing_when_form_was_never_accepted() {
    let state = RefCell::new(FormState::<VisitBooking>::new());
    state.borrow_mut().edit(BookingField::Name, "Draft".to_owned());

    block_on(run_simulated_submission::<VisitBooking, _, _, _>(
        |step| step(&mut state.borrow_mut()),
        |_| std::future::ready(()),
    ));

    let state = state.into_inner();
    assert_eq!(state.status, FormStatus::Idle);
    assert_eq!(state.values.name, "Draft");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn spawn_is_inert_without_browser() {
    let form = RwSignal::new(accepted_booking());
    spawn_simulated_submission(form);
    assert!(form.get_untracked().is_submitting());
}

#[test]
fn submit_form_surfaces_errors_for_blank_booking() {
    let form = RwSignal::new(FormState::<VisitBooking>::new());
    assert_eq!(submit_form(form), SubmitAttempt::Rejected);
    let state = form.get_untracked();
    assert_eq!(state.error_message(BookingField::Phone).as_deref(), Some("Phone number is required"));
    assert!(state.error(BookingField::Message).is_none());
}

#[test]
fn submit_form_ignores_presses_while_sending() {
    let form = RwSignal::new(accepted_booking());
    assert_eq!(submit_form(form), SubmitAttempt::InFlight);
    assert!(form.get_untracked().is_submitting());
}
