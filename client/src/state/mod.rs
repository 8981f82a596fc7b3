//! Client-side state models.
//!
//! DESIGN
//! ======
//! Plain Rust values with no reactive dependencies. Pages wrap them in
//! `RwSignal`s; tests exercise them directly.

pub mod booking;
pub mod catalog;
pub mod contact;
pub mod form;
pub mod ui;
