use serde::{Deserialize, Serialize};

/// A portfolio project, assembled from `projects/<id>/init.md` and `Details.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Source folder name, e.g. "line-follower"
    pub id: String,
    /// Display title; falls back to the id when not authored
    pub title: String,
    /// Never empty, authored order preserved
    pub categories: Vec<String>,
    /// Short brief shown on cards
    pub description: String,
    /// Root-absolute image path, e.g. "/projects/line-follower/res/cover.png"
    pub image: String,
    /// Always four ASCII digits
    pub year: String,
    pub tags: Vec<String>,
    /// Raw `Details.md` text, empty when the file is absent
    pub details_markdown: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// A skill entry from `skills/icons.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Slug identifier, e.g. "fusion-360"
    pub id: String,
    pub name: String,
    /// Grouping label, "Other" when unknown
    pub category: String,
    /// Root-absolute icon path, e.g. "/skills/icons/python.png"
    pub icon_path: String,
}

/// A group of skills sharing one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// An achievement from `ach.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Positional identifier, e.g. "ach-3"
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize: Option<String>,
}

/// A position of responsibility from `PoR.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Positional identifier, e.g. "exp-0"
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub role: String,
    /// Free text such as "Jan 2023 - Present", empty when not authored
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub label: String,
    pub value: String,
    pub href: Option<String>,
}

/// Presentation settings declared in `projects/Display.md`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    /// Curator-declared project ids, first occurrence wins
    pub order: Vec<String>,
    /// Grid column count from "Tabs per row - N"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tabs_per_row: Option<u32>,
}

/// Everything the about section renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutData {
    pub bio: String,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub achievements: Vec<Achievement>,
    pub contact: Vec<ContactInfo>,
}
