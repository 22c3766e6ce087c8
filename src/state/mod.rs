//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`form`, `session`, `ui`) so individual
//! components can depend on small focused models. Everything here is plain
//! data with synchronous transitions; components hold the values inside
//! `RwSignal`s and the network layer never touches them directly.

pub mod form;
pub mod session;
pub mod ui;
