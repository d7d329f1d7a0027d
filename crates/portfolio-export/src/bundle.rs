/// The JSON document handed to the rendering layer.
use serde::Serialize;

use portfolio_content::{
    AboutData, Achievement, Catalog, ContentSnapshot, DisplaySettings, Experience, Project, Skill,
    SkillGroup,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBundle {
    /// Content fingerprint; unchanged sources give an unchanged value
    pub fingerprint: String,
    pub display: DisplaySettings,
    pub projects: Vec<Project>,
    pub featured: Vec<Project>,
    pub categories: Vec<String>,
    pub skills: Vec<Skill>,
    pub skills_by_category: Vec<SkillGroup>,
    pub achievements: Vec<Achievement>,
    pub experiences: Vec<Experience>,
    pub about: AboutData,
}

impl ContentBundle {
    pub fn build(snapshot: &ContentSnapshot, featured_count: usize) -> Self {
        let catalog = Catalog::new(snapshot);
        Self {
            fingerprint: snapshot.fingerprint(),
            display: catalog.display_settings(),
            projects: catalog.projects(),
            featured: catalog.featured_projects(featured_count),
            categories: catalog.project_categories(),
            skills: catalog.skills(),
            skills_by_category: catalog.skills_by_category(),
            achievements: catalog.achievements(),
            experiences: catalog.experiences(),
            about: catalog.about(),
        }
    }
}
