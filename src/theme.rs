use std::{fmt, str::FromStr};

/// localStorage key holding the user's explicit choice.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Resolves the theme at startup: an explicit stored choice wins, otherwise
    /// follow the operating system.
    pub fn resolve(preference: ThemePreference, prefers_dark: bool) -> Self {
        match preference {
            ThemePreference::Dark => Self::Dark,
            ThemePreference::Light => Self::Light,
            ThemePreference::System if prefers_dark => Self::Dark,
            ThemePreference::System => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Class applied to `<html>`; tailwind's `dark:` variants key off it.
    pub fn html_class(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => "dark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

/// What is persisted under [`THEME_STORAGE_KEY`]. An empty or unrecognised
/// value means the user never chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl From<Theme> for ThemePreference {
    fn from(value: Theme) -> Self {
        match value {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::System => "",
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

impl FromStr for ThemePreference {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "dark" => Self::Dark,
            "light" => Self::Light,
            _ => Self::System,
        })
    }
}
