//! Labelled form control with its inline validation message.

use leptos::prelude::*;

use crate::state::form::{FormModel, FormState};

/// Reactive error message for one field of `form`.
pub fn field_error<M>(form: RwSignal<FormState<M>>, field: M::Field) -> Signal<Option<String>>
where
    M: FormModel + Send + Sync + 'static,
    M::Field: Send + Sync + 'static,
{
    Signal::derive(move || form.with(|f| f.error_message(field)))
}

#[component]
pub fn FormField(
    /// `id` of the wrapped control.
    id: &'static str,
    label: &'static str,
    #[prop(optional)] required: bool,
    #[prop(into)] error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-field" class:form-field--invalid=move || error.with(Option::is_some)>
            <label for=id class="form-field__label">
                {label}
                {required.then_some(" *")}
            </label>
            {children()}
            {move || error.get().map(|message| view! { <p class="form-field__error" role="alert">{message}</p> })}
        </div>
    }
}

/// Current value of `field`, for `prop:value`.
pub fn bind_value<M>(form: RwSignal<FormState<M>>, field: M::Field) -> impl Fn() -> String + Copy + Send + Sync + 'static
where
    M: FormModel + Send + Sync + 'static,
    M::Field: Send + Sync + 'static,
{
    move || form.with(|f| f.value(field).to_owned())
}

/// Input/change handler writing the control's value back into `field`.
pub fn bind_input<M>(form: RwSignal<FormState<M>>, field: M::Field) -> impl Fn(leptos::ev::Event) + Copy + 'static
where
    M: FormModel + Send + Sync + 'static,
    M::Field: Send + Sync + 'static,
{
    move |ev| form.update(|f| f.edit(field, event_target_value(&ev)))
}
