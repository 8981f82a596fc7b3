//! Hardcoded museum content rendered by the pages.
//!
//! DESIGN
//! ======
//! Every record is a `&'static` table entry. Nothing here is created or
//! mutated at run time; UI state (likes, filters) lives in `state` and only
//! ever refers back to these rows by id.

pub mod artworks;
pub mod exhibitions;
pub mod museum;
pub mod visit;
