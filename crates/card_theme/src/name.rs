//! Theme names

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of selectable themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeName {
    /// Clean white card with blue/violet accents.
    #[default]
    #[serde(rename = "minimal")]
    Minimal,
    /// Dark surfaces; the only theme classified as dark.
    #[serde(rename = "dark mode")]
    DarkMode,
    /// Brand theme with red accents.
    #[serde(rename = "verizon")]
    Verizon,
}

/// Returned when parsing a string that names no theme.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme {0:?} (expected one of: minimal, dark mode, verizon)")]
pub struct UnknownTheme(pub String);

impl ThemeName {
    /// Stable theme id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::DarkMode => "dark mode",
            Self::Verizon => "verizon",
        }
    }

    /// Label shown on the theme switcher buttons.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::DarkMode => "Dark Mode",
            Self::Verizon => "Verizon",
        }
    }

    /// Full theme list, in switcher order.
    pub fn all() -> &'static [ThemeName] {
        const THEMES: [ThemeName; 3] = [ThemeName::Minimal, ThemeName::DarkMode, ThemeName::Verizon];
        &THEMES
    }

    /// Whether the host page should switch to its dark-mode styling.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::DarkMode)
    }
}

impl Display for ThemeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeName {
    type Err = UnknownTheme;

    /// Accepts the stable id, plus `dark-mode` / `dark_mode` / `dark` for
    /// command lines where spaces are awkward.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "dark mode" | "dark-mode" | "dark_mode" | "dark" => Ok(Self::DarkMode),
            "verizon" => Ok(Self::Verizon),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_from_str() {
        for name in ThemeName::all() {
            assert_eq!(name.id().parse::<ThemeName>(), Ok(*name));
        }
    }

    #[test]
    fn test_cli_friendly_aliases() {
        assert_eq!("dark-mode".parse::<ThemeName>(), Ok(ThemeName::DarkMode));
        assert_eq!(" Verizon ".parse::<ThemeName>(), Ok(ThemeName::Verizon));
        assert!("neon".parse::<ThemeName>().is_err());
    }

    #[test]
    fn test_only_dark_mode_is_dark() {
        let dark: Vec<_> = ThemeName::all().iter().filter(|t| t.is_dark()).collect();
        assert_eq!(dark, vec![&ThemeName::DarkMode]);
    }
}
