use super::*;

// =============================================================
// Theme defaults
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggled_flips_between_variants() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}

#[test]
fn toggled_twice_round_trips() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

// =============================================================
// Body classes
// =============================================================

#[test]
fn body_classes_match_display_attribute() {
    assert_eq!(Theme::Dark.body_class(), "dark-theme");
    assert_eq!(Theme::Light.body_class(), "light-theme");
}
