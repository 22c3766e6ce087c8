#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Color theme preference, applied as a class on `<body>`.
///
/// Held only in memory; a reload returns to the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Class name applied to `<body>` while this theme is active.
    pub fn body_class(self) -> &'static str {
        match self {
            Self::Dark => "dark-theme",
            Self::Light => "light-theme",
        }
    }

    /// Human-readable name, used in toggle button labels.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}
