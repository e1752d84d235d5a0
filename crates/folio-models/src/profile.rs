//! Profile records for the portfolio page.
//!
//! A [`Profile`] aggregates everything the page shows. Records are plain
//! data: they are built once (from [`Profile::builtin`] or a JSON file) and
//! never mutated afterwards.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};

/// Schemes a social link may hand off to.
const SUPPORTED_SCHEMES: [&str; 4] = ["https://", "http://", "mailto:", "tel:"];

/// Icon identifiers used by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Github,
    Linkedin,
    Twitter,
    Mail,
    Phone,
    MapPin,
    Globe,
    Code,
    Server,
    Database,
    Terminal,
    Rocket,
    ExternalLink,
}

impl Icon {
    /// Stable identifier, as used in markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Twitter => "twitter",
            Icon::Mail => "mail",
            Icon::Phone => "phone",
            Icon::MapPin => "map-pin",
            Icon::Globe => "globe",
            Icon::Code => "code",
            Icon::Server => "server",
            Icon::Database => "database",
            Icon::Terminal => "terminal",
            Icon::Rocket => "rocket",
            Icon::ExternalLink => "external-link",
        }
    }

    /// Short glyph for the terminal renderer.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Github => "GH",
            Icon::Linkedin => "in",
            Icon::Twitter => "X",
            Icon::Mail => "@",
            Icon::Phone => "☎",
            Icon::MapPin => "⌖",
            Icon::Globe => "◍",
            Icon::Code => "</>",
            Icon::Server => "▤",
            Icon::Database => "◫",
            Icon::Terminal => ">_",
            Icon::Rocket => "➚",
            Icon::ExternalLink => "↗",
        }
    }
}

/// A titled group of skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Group title, unique across the profile.
    pub title: String,
    /// Icon shown on the card.
    pub icon: Icon,
    /// Skill names in display order.
    pub skills: Vec<String>,
}

/// One education milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Year or status label (e.g. "2022", "Pursuing").
    pub label: String,
    pub degree: String,
    pub institution: String,
    /// Optional grade; the badge is omitted when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

/// One work experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
    pub duration: String,
    /// Status tag (e.g. "Ongoing").
    pub status: String,
    /// Responsibility bullets, never empty.
    pub responsibilities: Vec<String>,
}

/// A featured project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    /// External link; `#` marks a non-navigating placeholder.
    pub link: String,
    pub tags: Vec<String>,
    pub features: Vec<String>,
}

/// An outbound profile or contact link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Target URI (`https`, `mailto` or `tel`).
    pub href: String,
    pub icon: Icon,
    /// Accessible label.
    pub label: String,
}

impl SocialLink {
    /// Create a new social link.
    pub fn new(href: impl Into<String>, icon: Icon, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            icon,
            label: label.into(),
        }
    }

    /// Whether the target uses a scheme the page can hand off.
    pub fn has_supported_scheme(&self) -> bool {
        SUPPORTED_SCHEMES.iter().any(|s| self.href.starts_with(s))
    }
}

/// An icon and a line of text in the about section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoItem {
    pub icon: Icon,
    pub text: String,
}

/// An achievement tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub emoji: String,
    pub text: String,
}

/// Landing banner content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Availability badge (e.g. "Available for Hire").
    pub badge: String,
    /// Text shown before the typed name.
    pub greeting: String,
    /// Headline role, emphasised inside the tagline.
    pub role: String,
    /// Tagline text following the role.
    pub tagline: String,
}

/// Direct contact block and call-to-action card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    pub phone_display: String,
    pub phone_uri: String,
    pub email: String,
    pub headline: String,
    pub pitch: String,
    pub action_label: String,
}

/// Everything the page presents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name; this is the reveal target.
    pub name: String,
    /// Short name shown as the logo.
    pub short_name: String,
    pub hero: Hero,
    /// About paragraphs.
    pub bio: Vec<String>,
    pub info: Vec<InfoItem>,
    /// Chronological as authored; never re-sorted.
    pub education: Vec<EducationEntry>,
    pub skills_intro: String,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub achievements: Vec<Achievement>,
    pub contact: ContactCard,
    /// Links in the landing banner.
    pub hero_links: Vec<SocialLink>,
    /// Links in the footer.
    pub footer_links: Vec<SocialLink>,
}

impl Profile {
    /// Parse a profile from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let profile: Profile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load a profile from a JSON file and validate it.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| ContentError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    /// Check the content invariants.
    ///
    /// # Errors
    /// Returns the first violation found, naming the offending record.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ContentError::EmptyName);
        }

        let mut titles = HashSet::new();
        for group in &self.skills {
            if group.skills.is_empty() {
                return Err(ContentError::EmptySkillGroup(group.title.clone()));
            }
            if !titles.insert(group.title.as_str()) {
                return Err(ContentError::DuplicateSkillGroup(group.title.clone()));
            }
        }

        for entry in &self.experience {
            if entry.responsibilities.is_empty() {
                return Err(ContentError::EmptyResponsibilities(entry.role.clone()));
            }
        }

        for link in self.hero_links.iter().chain(&self.footer_links) {
            if !link.has_supported_scheme() {
                return Err(ContentError::UnsupportedLink {
                    label: link.label.clone(),
                    href: link.href.clone(),
                });
            }
        }

        Ok(())
    }

    /// All distinct social links, hero first.
    pub fn social_links(&self) -> Vec<&SocialLink> {
        let mut seen = HashSet::new();
        self.hero_links
            .iter()
            .chain(&self.footer_links)
            .filter(|link| seen.insert(link.href.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        assert!(Profile::builtin().validate().is_ok());
    }

    #[test]
    fn test_empty_skill_group_rejected() {
        let mut profile = Profile::builtin();
        profile.skills[1].skills.clear();
        let err = profile.validate().unwrap_err();
        assert!(matches!(err, ContentError::EmptySkillGroup(ref t) if t == "Backend"));
    }

    #[test]
    fn test_duplicate_skill_title_rejected() {
        let mut profile = Profile::builtin();
        profile.skills[2].title = profile.skills[0].title.clone();
        assert!(matches!(
            profile.validate(),
            Err(ContentError::DuplicateSkillGroup(_))
        ));
    }

    #[test]
    fn test_empty_bullets_rejected() {
        let mut profile = Profile::builtin();
        profile.experience[0].responsibilities.clear();
        assert!(matches!(
            profile.validate(),
            Err(ContentError::EmptyResponsibilities(_))
        ));
    }

    #[test]
    fn test_unsupported_scheme_rejected() {
        let mut profile = Profile::builtin();
        profile
            .footer_links
            .push(SocialLink::new("ftp://example.com", Icon::Globe, "FTP"));
        let err = profile.validate().unwrap_err();
        assert!(matches!(err, ContentError::UnsupportedLink { ref label, .. } if label == "FTP"));
    }

    #[test]
    fn test_json_round_trip_keeps_optional_grade() {
        let profile = Profile::builtin();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"grade\":\"CGPA: 8.35\""));

        let loaded = Profile::from_json_str(&json).unwrap();
        assert_eq!(loaded, profile);
        assert!(loaded.education[1].grade.is_none());
    }

    #[test]
    fn test_from_json_file_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");

        let mut profile = Profile::builtin();
        profile.name = "   ".to_string();
        fs::write(&path, serde_json::to_string(&profile).unwrap()).unwrap();

        assert!(matches!(
            Profile::from_json_file(&path),
            Err(ContentError::EmptyName)
        ));
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = Profile::from_json_file(Path::new("/nonexistent/content.json")).unwrap_err();
        assert!(matches!(err, ContentError::ReadError { .. }));
    }

    #[test]
    fn test_social_links_deduplicated() {
        let profile = Profile::builtin();
        let links = profile.social_links();
        let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["GitHub", "LinkedIn", "Twitter", "Email"]);
    }
}
