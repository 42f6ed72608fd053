#![forbid(unsafe_code)]

//! Typed content records.
//!
//! Categorical enums serialize as their English display strings — the
//! same strings the filter layer puts in `type`/`zone` query parameters,
//! so a choice filter's value compares directly against `as_str()`.

use dhaalan_i18n::Locale;
use serde::{Deserialize, Serialize};

/// A string carried in both site languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    pub dv: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, dv: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            dv: dv.into(),
        }
    }

    /// Text for a locale; an empty Dhivehi entry falls back to English.
    #[must_use]
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Dv if !self.dv.is_empty() => &self.dv,
            _ => &self.en,
        }
    }
}

/// Expo floor zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    #[serde(rename = "Career Hub Zone")]
    CareerHub,
    #[serde(rename = "Education Provider Zone")]
    EducationProvider,
    #[serde(rename = "Skills Experience Zone")]
    SkillsExperience,
    #[serde(rename = "Innovation & Startup Zone")]
    InnovationStartup,
    #[serde(rename = "Entertainment Zone")]
    Entertainment,
    #[serde(rename = "Food & Culinary Zone")]
    FoodCulinary,
}

impl Zone {
    pub const ALL: [Zone; 6] = [
        Zone::CareerHub,
        Zone::EducationProvider,
        Zone::SkillsExperience,
        Zone::InnovationStartup,
        Zone::Entertainment,
        Zone::FoodCulinary,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Zone::CareerHub => "Career Hub Zone",
            Zone::EducationProvider => "Education Provider Zone",
            Zone::SkillsExperience => "Skills Experience Zone",
            Zone::InnovationStartup => "Innovation & Startup Zone",
            Zone::Entertainment => "Entertainment Zone",
            Zone::FoodCulinary => "Food & Culinary Zone",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of posted opportunities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpportunityType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Internship,
    Apprenticeship,
}

impl OpportunityType {
    pub const ALL: [OpportunityType; 4] = [
        OpportunityType::FullTime,
        OpportunityType::PartTime,
        OpportunityType::Internship,
        OpportunityType::Apprenticeship,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OpportunityType::FullTime => "Full-time",
            OpportunityType::PartTime => "Part-time",
            OpportunityType::Internship => "Internship",
            OpportunityType::Apprenticeship => "Apprenticeship",
        }
    }
}

impl std::fmt::Display for OpportunityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session formats on the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    Talk,
    Panel,
    Workshop,
    Ceremony,
}

impl SessionType {
    pub const ALL: [SessionType; 4] = [
        SessionType::Talk,
        SessionType::Panel,
        SessionType::Workshop,
        SessionType::Ceremony,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SessionType::Talk => "Talk",
            SessionType::Panel => "Panel",
            SessionType::Workshop => "Workshop",
            SessionType::Ceremony => "Ceremony",
        }
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SponsorTier {
    Main,
    Gold,
    Silver,
    Bronze,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceCategory {
    #[serde(rename = "Event Guides")]
    EventGuides,
    #[serde(rename = "Career Resources")]
    CareerResources,
    #[serde(rename = "Industry Reports")]
    IndustryReports,
    #[serde(rename = "Media Kit")]
    MediaKit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Pdf,
    Docx,
    Zip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateType {
    Announcement,
    Update,
    #[serde(rename = "Schedule Change")]
    ScheduleChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateCategory {
    General,
    Speakers,
    Exhibitors,
    Registration,
    Venue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateStatus {
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exhibitor {
    pub id: u32,
    pub name: String,
    pub zone: Zone,
    pub booth: String,
    pub description: Localized,
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: u32,
    pub title: String,
    pub exhibitor_name: String,
    pub kind: OpportunityType,
    pub zone: Zone,
    /// Application link; `None` renders a disabled apply button.
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: u32,
    /// 1-based expo day.
    pub day: u8,
    /// 24h start time, `HH:MM`, used for in-day ordering.
    pub time: String,
    pub title: Localized,
    pub kind: SessionType,
    pub location: String,
    pub speaker_ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub id: u32,
    pub name: String,
    pub role: Localized,
    pub bio: Localized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u32,
    pub category: ResourceCategory,
    pub kind: ResourceType,
    pub title: Localized,
    pub description: Localized,
    pub file_url: String,
    pub file_size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: u32,
    /// ISO date, `YYYY-MM-DD`; lexicographic order is chronological.
    pub date: String,
    pub title: Localized,
    pub excerpt: Localized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsor {
    pub id: u32,
    pub name: String,
    pub tier: SponsorTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub id: u32,
    pub date: String,
    pub kind: UpdateType,
    pub title: Localized,
    pub category: UpdateCategory,
    pub status: UpdateStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: u32,
    pub message: Localized,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: u32,
    pub url: String,
    pub caption: Localized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportantInfo {
    pub id: u32,
    pub title: Localized,
    pub body: Localized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_falls_back_to_english_when_dhivehi_empty() {
        let text = Localized::new("Hello", "");
        assert_eq!(text.get(Locale::Dv), "Hello");
        let text = Localized::new("Hello", "ހެލޯ");
        assert_eq!(text.get(Locale::Dv), "ހެލޯ");
        assert_eq!(text.get(Locale::En), "Hello");
    }

    #[test]
    fn zone_serializes_as_display_string() {
        let json = serde_json::to_string(&Zone::InnovationStartup).unwrap();
        assert_eq!(json, "\"Innovation & Startup Zone\"");
        let back: Zone = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Zone::InnovationStartup);
        assert_eq!(Zone::InnovationStartup.to_string(), "Innovation & Startup Zone");
    }

    #[test]
    fn opportunity_type_strings_match_filter_values() {
        for kind in OpportunityType::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}
