//! Authentication primitives.
//!
//! - [`jwt`] -- JWT access-token generation and validation.
//!
//! Login and credential storage live in the account subsystem; this service
//! only verifies the tokens it issues.

pub mod jwt;
