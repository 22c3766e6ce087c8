//! Browser-facing helpers that don't belong to a single component.

pub mod theme;
