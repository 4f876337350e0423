use std::{fmt, str::FromStr};

use thiserror::Error;

/// In-page anchors shared by the header navigation and the scroll tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// Every section in document order.
    pub const ALL: [SectionId; 5] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    /// Sections listed in the navigation bar (the hero is reached via the logo).
    pub const NAV: [SectionId; 4] = [Self::About, Self::Skills, Self::Projects, Self::Contact];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No section with id {0:?}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids_and_anchors() {
        assert_eq!("projects".parse(), Ok(SectionId::Projects));
        assert_eq!("#contact".parse(), Ok(SectionId::Contact));
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(UnknownSection("blog".to_string()))
        );
        assert_eq!(
            "#".parse::<SectionId>().unwrap_err().to_string(),
            "No section with id \"\""
        );
        for id in SectionId::ALL {
            assert_eq!(id.anchor().parse(), Ok(id));
        }
    }
}
