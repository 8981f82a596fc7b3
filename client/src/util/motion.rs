//! Entry-animation helpers.
//!
//! Animations are plain CSS keyframes (`style/musea.css`); components only
//! pick a reveal class and a stagger delay.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Default delay between consecutive items of a list.
pub const STAGGER_STEP_MS: usize = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    FadeUp,
    FadeIn,
    SlideIn,
    ScaleIn,
}

impl Reveal {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::FadeUp => "reveal reveal--fade-up",
            Self::FadeIn => "reveal reveal--fade-in",
            Self::SlideIn => "reveal reveal--slide-in",
            Self::ScaleIn => "reveal reveal--scale-in",
        }
    }
}

/// Inline style delaying the `index`-th item by `index * step_ms`.
#[must_use]
pub fn stagger(index: usize, step_ms: usize) -> String {
    format!("animation-delay: {}ms", index.saturating_mul(step_ms))
}
