//! # colorcloud-client
//!
//! Leptos + WASM browser client for the ColorCloud trading tool. Covers the
//! pre-auth surface: the login/registration form and the session-guarded
//! routing between it and the dashboard shell. All data views are served by
//! the separate backend API on port 5000 of the same host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
