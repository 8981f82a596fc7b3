//! Simulated form submission: wait, confirm, wait, reset.
//!
//! TRADE-OFFS
//! ==========
//! There is no endpoint behind the forms. The "send" is two fixed sleeps
//! with no failure or retry path. The sequence is written against an
//! injected sleeper so it can run under a plain executor in tests and under
//! `gloo-timers` in the browser.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

use crate::state::form::{FormModel, FormState, RESET_DELAY, SUBMIT_DELAY, SubmitAttempt};

/// Drive `Submitting -> Confirmed -> Idle`, applying each step via `update`.
pub async fn run_simulated_submission<M, U, S, Fut>(mut update: U, sleep: S)
where
    M: FormModel,
    U: FnMut(fn(&mut FormState<M>)),
    S: Fn(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    sleep(SUBMIT_DELAY).await;
    update(FormState::confirm);
    sleep(RESET_DELAY).await;
    update(FormState::reset);
}

/// Start the simulated send for a form whose submit was just accepted.
///
/// Only the browser build has timers. Without the `hydrate` feature nothing
/// is spawned and the form stays `Submitting`. Server-rendered pages never
/// receive submit events, so only native tests reach that path.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn spawn_simulated_submission<M>(form: RwSignal<FormState<M>>)
where
    M: FormModel + Send + Sync + 'static,
    M::Field: Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        log::debug!("simulated submission started");
        run_simulated_submission(move |step| form.update(step), gloo_timers::future::sleep).await;
        log::debug!("simulated submission finished");
    });
}

/// Submit handler shared by the form pages: validate, then start the send
/// only if validation passed and no send is already running.
pub fn submit_form<M>(form: RwSignal<FormState<M>>) -> SubmitAttempt
where
    M: FormModel + Send + Sync + 'static,
    M::Field: Send + Sync + 'static,
{
    let attempt = form.try_update(FormState::submit).unwrap_or(SubmitAttempt::InFlight);
    if attempt == SubmitAttempt::Started {
        spawn_simulated_submission(form);
    }
    attempt
}
