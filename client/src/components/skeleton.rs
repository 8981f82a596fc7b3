//! Loading placeholders.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkeletonShape {
    Text,
    #[default]
    Rect,
    Circle,
}

/// Pulsing placeholder block.
#[component]
pub fn Skeleton(
    #[prop(optional)] shape: SkeletonShape,
    #[prop(optional, into)] class: String,
    #[prop(optional)] width: Option<&'static str>,
    #[prop(optional)] height: Option<&'static str>,
) -> impl IntoView {
    let shape = match shape {
        SkeletonShape::Text => "skeleton--text",
        SkeletonShape::Rect => "skeleton--rect",
        SkeletonShape::Circle => "skeleton--circle",
    };
    let style = [width.map(|w| format!("width: {w};")), height.map(|h| format!("height: {h};"))]
        .into_iter()
        .flatten()
        .collect::<String>();
    view! { <div class=format!("skeleton {shape} {class}") style=style aria-hidden="true"></div> }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[component]
pub fn LoadingSpinner(#[prop(optional)] size: SpinnerSize) -> impl IntoView {
    let size = match size {
        SpinnerSize::Sm => "spinner--sm",
        SpinnerSize::Md => "spinner--md",
        SpinnerSize::Lg => "spinner--lg",
    };
    view! { <span class=format!("spinner {size}") role="status" aria-label="Loading"></span> }
}
