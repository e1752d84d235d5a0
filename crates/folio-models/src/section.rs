//! Section identifiers and the fixed navigation list.
//!
//! Every scrollable region of the page is addressed by a stable lowercase
//! identifier. The navigation bar lists a fixed subset of them in order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A scrollable region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    /// Implicit top of the document (the logo target).
    Top,
    /// Landing banner with the typed name.
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Top,
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// The element identifier for this section.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Top => "top",
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an identifier does not name a known section.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// One entry in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Visible label.
    pub label: &'static str,
    /// Section the label scrolls to.
    pub section: SectionId,
}

impl NavItem {
    /// Identifier the item navigates to (the lowercased label).
    pub fn target(&self) -> &'static str {
        self.section.as_str()
    }
}

/// Navigation items in display order.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        label: "About",
        section: SectionId::About,
    },
    NavItem {
        label: "Skills",
        section: SectionId::Skills,
    },
    NavItem {
        label: "Experience",
        section: SectionId::Experience,
    },
    NavItem {
        label: "Projects",
        section: SectionId::Projects,
    },
    NavItem {
        label: "Contact",
        section: SectionId::Contact,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_are_lowercased_labels() {
        for item in NAV_ITEMS {
            assert_eq!(item.target(), item.label.to_lowercase());
        }
    }

    #[test]
    fn test_nav_order() {
        let labels: Vec<&str> = NAV_ITEMS.iter().map(|i| i.label).collect();
        assert_eq!(labels, ["About", "Skills", "Experience", "Projects", "Contact"]);
    }

    #[test]
    fn test_parse_known_section() {
        assert_eq!("projects".parse::<SectionId>(), Ok(SectionId::Projects));
        assert_eq!("top".parse::<SectionId>(), Ok(SectionId::Top));
    }

    #[test]
    fn test_parse_unknown_section() {
        let err = "doesnotexist".parse::<SectionId>().unwrap_err();
        assert_eq!(err, UnknownSection("doesnotexist".to_string()));
        // Identifiers are case-sensitive
        assert!("Projects".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_unknown_section_message() {
        let err: Box<dyn std::error::Error> = Box::new(UnknownSection("blog".to_string()));
        assert_eq!(err.to_string(), "unknown section: blog");
    }

    #[test]
    fn test_serde_uses_identifier() {
        let json = serde_json::to_string(&SectionId::Experience).unwrap();
        assert_eq!(json, "\"experience\"");
    }
}
