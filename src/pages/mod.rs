//! Page-level components, one per route.

pub mod auth;
pub mod dashboard;
