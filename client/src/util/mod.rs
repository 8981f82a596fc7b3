//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser timing concerns (submission delays, entry animations) live here
//! so pages and components stay declarative.

pub mod motion;
pub mod submission;
