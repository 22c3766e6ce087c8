//! Theme application.
//!
//! The active theme is reflected as a class on `<body>` (`dark-theme` or
//! `light-theme`) so the stylesheet can swap palettes. The preference lives
//! only in component state; nothing is persisted, and a reload comes back
//! in the default theme.

use crate::state::ui::Theme;

/// Set the `<body>` class to the given theme's class.
pub fn apply(theme: Theme) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        body.set_class_name(theme.body_class());
    }
}
