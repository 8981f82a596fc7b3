//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Primitives (button, typography, container, skeleton, picture) carry the
//! design tokens; layout and section components compose them for the pages.
//! Components own only presentation state; content comes from `content`.

pub mod artwork_card;
pub mod button;
pub mod category_chips;
pub mod container;
pub mod footer;
pub mod form_field;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod page_hero;
pub mod picture;
pub mod section_intro;
pub mod skeleton;
pub mod stat_strip;
pub mod typography;
