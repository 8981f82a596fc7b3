//! Button primitive and its link-styled twin.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

use super::skeleton::{LoadingSpinner, SpinnerSize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Glass,
    GlassRed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn spinner(self) -> SpinnerSize {
        match self {
            Self::Sm => SpinnerSize::Sm,
            Self::Md => SpinnerSize::Md,
            Self::Lg => SpinnerSize::Lg,
        }
    }
}

/// Class list for a button of `variant`/`size`, with caller extras appended.
#[must_use]
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "btn--primary",
        ButtonVariant::Secondary => "btn--secondary",
        ButtonVariant::Outline => "btn--outline",
        ButtonVariant::Ghost => "btn--ghost",
        ButtonVariant::Glass => "btn--glass",
        ButtonVariant::GlassRed => "btn--glass-red",
    };
    let size = match size {
        ButtonSize::Sm => "btn--sm",
        ButtonSize::Md => "btn--md",
        ButtonSize::Lg => "btn--lg",
    };
    let extra = extra.trim();
    if extra.is_empty() { format!("btn {variant} {size}") } else { format!("btn {variant} {size} {extra}") }
}

/// Clickable button. While `loading`, a spinner replaces the icon and the
/// button is disabled.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    /// Glyph rendered beside the label.
    #[prop(optional)]
    icon: Option<&'static str>,
    #[prop(optional)] icon_right: bool,
    #[prop(into, default = Signal::stored(false))] loading: Signal<bool>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant, size, &class);
    let spinner = size.spinner();
    let glyph = move |right: bool| {
        icon.filter(|_| icon_right == right && !loading.get())
            .map(|g| view! { <span class="btn__icon" aria-hidden="true">{g}</span> })
    };

    view! {
        <button
            type=button_type
            class=class
            disabled=move || disabled.get() || loading.get()
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            <span class="btn__shine"></span>
            <span class="btn__content">
                <Show when=move || loading.get()>
                    <LoadingSpinner size=spinner/>
                </Show>
                {move || glyph(false)}
                <span>{children()}</span>
                {move || glyph(true)}
            </span>
        </button>
    }
}

/// Anchor styled as a button, for navigation CTAs.
#[component]
pub fn ButtonLink(
    href: &'static str,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional)] icon_right: bool,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant, size, &class);
    let left = icon.filter(|_| !icon_right);
    let right = icon.filter(|_| icon_right);
    view! {
        <a href=href class=class>
            <span class="btn__shine"></span>
            <span class="btn__content">
                {left.map(|g| view! { <span class="btn__icon" aria-hidden="true">{g}</span> })}
                <span>{children()}</span>
                {right.map(|g| view! { <span class="btn__icon" aria-hidden="true">{g}</span> })}
            </span>
        </a>
    }
}
