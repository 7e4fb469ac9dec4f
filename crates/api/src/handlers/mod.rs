//! Request handlers, one module per resource.

pub mod admin_links;
pub mod admins;
