//! Light/dark theme context.
//!
//! The theme is a plain value handed to rendering. The document-level
//! CSS custom properties it implies are listed by
//! [`ThemeContext::custom_properties`] and written once, at the app
//! boundary, by `cheno-io`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Color scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl ColorScheme {
    /// Map a `prefers-color-scheme: dark` match to a scheme.
    #[must_use]
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// The opposite scheme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase name, as used in `data-theme`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A custom property assignment: `Some(value)` sets it, `None` removes it
/// so the stylesheet default applies.
pub type CustomProperty = (&'static str, Option<&'static str>);

const DARK_PROPERTIES: &[CustomProperty] = &[
    ("--mdc-theme-primary", Some("var(--elara-font-color)")),
    ("--elara-placeholder-background", Some("rgba(165,165,165,.5)")),
    ("--elara-background-color", Some("#373737")),
    ("--elara-font-color", Some("#f0f0f0")),
    ("--elara-font-hover", Some("#9e9e9e")),
];

const LIGHT_PROPERTIES: &[CustomProperty] = &[
    ("--mdc-theme-primary", Some("var(--elara-primary)")),
    ("--elara-placeholder-background", Some("rgba(67, 84, 128, 0.5)")),
    ("--elara-background-color", None),
    ("--elara-font-color", None),
    ("--elara-font-hover", None),
];

/// Theme passed down to rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeContext {
    /// Active scheme.
    pub scheme: ColorScheme,
}

impl ThemeContext {
    /// Theme for a scheme.
    #[must_use]
    pub const fn new(scheme: ColorScheme) -> Self {
        Self { scheme }
    }

    /// Document-level custom properties for this theme.
    #[must_use]
    pub const fn custom_properties(self) -> &'static [CustomProperty] {
        match self.scheme {
            ColorScheme::Light => LIGHT_PROPERTIES,
            ColorScheme::Dark => DARK_PROPERTIES,
        }
    }
}
