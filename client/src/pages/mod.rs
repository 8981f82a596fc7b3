//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state (filters, form lifecycle) and
//! delegates rendering details to `components`.

pub mod about;
pub mod collections;
pub mod contact;
pub mod exhibitions;
pub mod home;
pub mod not_found;
pub mod visit;
