//! Domain logic for admin account administration.
//!
//! Everything in this crate is pure: no database or HTTP types. The `db` and
//! `api` crates build on these primitives.

pub mod error;
pub mod groups;
pub mod linking;
pub mod naming;
pub mod object_id;
pub mod paging;
pub mod sorting;
pub mod types;
