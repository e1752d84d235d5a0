//! Content model for Folio.
//!
//! This crate provides the read-only records the portfolio page is built
//! from: skill groups, education and experience entries, projects, social
//! links, and the section identifiers the page is addressed by.

pub mod builtin;
pub mod error;
pub mod profile;
pub mod section;

pub use error::{ContentError, Result};
pub use profile::{
    Achievement, ContactCard, EducationEntry, ExperienceEntry, Hero, Icon, InfoItem, Profile,
    ProjectEntry, SkillGroup, SocialLink,
};
pub use section::{NavItem, SectionId, UnknownSection, NAV_ITEMS};
