//! Light/Dark Theme
//!
//! One flag for the whole tree. Components never hold their own copy; they
//! receive the current `Theme` from the shell and ask it for their classes.

use serde::{Deserialize, Serialize};

/// Visual variant shared by every styled component
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other variant
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Flip in place
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Outer page wrapper
    pub const fn shell_class(self) -> &'static str {
        match self {
            Self::Light => "bg-gray-50 text-gray-800",
            Self::Dark => "bg-gray-950 text-gray-100",
        }
    }

    /// Header bar
    pub const fn nav_class(self) -> &'static str {
        match self {
            Self::Light => "bg-blue-900 text-white",
            Self::Dark => "bg-gray-900 text-white",
        }
    }

    pub const fn footer_class(self) -> &'static str {
        match self {
            Self::Light => "bg-blue-900 text-blue-200",
            Self::Dark => "bg-gray-900 text-gray-300",
        }
    }

    /// Label on the toggle button: names the variant a click switches to
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles(theme: Theme) -> [&'static str; 4] {
        [
            theme.shell_class(),
            theme.nav_class(),
            theme.footer_class(),
            theme.toggle_label(),
        ]
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::default().toggled(), Theme::Dark);
    }

    #[test]
    fn test_toggle_parity() {
        let original = styles(Theme::default());
        let alternate = styles(Theme::Dark);

        let mut theme = Theme::default();
        for n in 1..=8 {
            theme.toggle();
            let current = styles(theme);
            if n % 2 == 0 {
                assert_eq!(current, original, "after {n} toggles");
            } else {
                assert_eq!(current, alternate, "after {n} toggles");
            }
        }
    }

    #[test]
    fn test_every_component_changes_with_theme() {
        let light = styles(Theme::Light);
        let dark = styles(Theme::Dark);
        for (l, d) in light.iter().zip(dark.iter()) {
            assert_ne!(l, d);
        }
    }

    #[test]
    fn test_toggle_label_names_other_variant() {
        assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
        assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
    }
}
