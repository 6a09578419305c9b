//! Shared value types used across the viewer

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Content persona currently presented. Exactly one is active; the value is
/// owned by the app and handed down by reference, never a global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Technical,
    Copywriting,
}

impl Profile {
    /// The persona a switch from `self` lands on
    pub fn toggled(self) -> Self {
        match self {
            Profile::Technical => Profile::Copywriting,
            Profile::Copywriting => Profile::Technical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Profile::Technical => "Technical",
            Profile::Copywriting => "Copywriting",
        }
    }
}

/// Persisted light/dark preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Page sections, in presentation order. Drives navigation links, smooth
/// scrolling targets, and reveal tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Resume,
    Achievements,
    Projects,
    Certifications,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Resume,
        SectionId::Achievements,
        SectionId::Projects,
        SectionId::Certifications,
        SectionId::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Resume => "Resume",
            SectionId::Achievements => "Achievements",
            SectionId::Projects => "Projects",
            SectionId::Certifications => "Certifications",
            SectionId::Contact => "Contact",
        }
    }
}
