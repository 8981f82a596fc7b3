//! Centered max-width wrapper.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContainerSize {
    Sm,
    Md,
    #[default]
    Lg,
    Xl,
    Full,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Padding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

#[must_use]
pub fn container_class(size: ContainerSize, padding: Padding, extra: &str) -> String {
    let size = match size {
        ContainerSize::Sm => "container--sm",
        ContainerSize::Md => "container--md",
        ContainerSize::Lg => "container--lg",
        ContainerSize::Xl => "container--xl",
        ContainerSize::Full => "container--full",
    };
    let padding = match padding {
        Padding::None => "pad-none",
        Padding::Sm => "pad-sm",
        Padding::Md => "pad-md",
        Padding::Lg => "pad-lg",
    };
    format!("container {size} {padding} {extra}").trim_end().to_owned()
}

#[component]
pub fn Container(
    #[prop(optional)] size: ContainerSize,
    #[prop(optional)] padding: Padding,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! { <div class=container_class(size, padding, &class)>{children()}</div> }
}
