/// Read operations over a content snapshot.
///
/// Every call re-parses from the snapshot. There is no cache, so two calls over
/// the same snapshot always return equal values.
use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::contact;
use crate::model::{
    AboutData, Achievement, ContactInfo, DisplaySettings, Experience, Project, Skill, SkillGroup,
};
use crate::parser::{display, project, sections, skills};
use crate::snapshot::ContentSnapshot;

pub const DEFAULT_FEATURED_COUNT: usize = 4;

#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    snapshot: &'a ContentSnapshot,
}

impl<'a> Catalog<'a> {
    pub fn new(snapshot: &'a ContentSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn display_settings(&self) -> DisplaySettings {
        self.snapshot
            .display()
            .map(display::parse_display)
            .unwrap_or_default()
    }

    /// All projects in display order. Folders without a usable `init.md` are skipped.
    pub fn projects(&self) -> Vec<Project> {
        let mut projects: Vec<Project> = self
            .snapshot
            .projects()
            .filter_map(|(id, source)| {
                let Some(init) = source.init.as_deref() else {
                    debug!(project = id, "no init.md, skipping");
                    return None;
                };
                let Some(fields) = project::parse_init(init) else {
                    warn!(project = id, "init.md has no recognized fields, skipping");
                    return None;
                };
                Some(project::build_project(id, fields, source.details.as_deref()))
            })
            .collect();

        display::apply_display_order(&mut projects, &self.display_settings().order);
        projects
    }

    pub fn project_by_id(&self, id: &str) -> Option<Project> {
        self.projects().into_iter().find(|p| p.id == id)
    }

    /// The first `count` projects in display order.
    pub fn featured_projects(&self, count: usize) -> Vec<Project> {
        let mut projects = self.projects();
        projects.truncate(count);
        projects
    }

    /// Unique categories across all projects, sorted.
    pub fn project_categories(&self) -> Vec<String> {
        self.projects()
            .into_iter()
            .flat_map(|p| p.categories)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn projects_in_category(&self, category: &str) -> Vec<Project> {
        self.projects()
            .into_iter()
            .filter(|p| p.categories.iter().any(|c| c == category))
            .collect()
    }

    /// Neighbours of `id` in display order as `(previous, next)`.
    pub fn adjacent_projects(&self, id: &str) -> (Option<Project>, Option<Project>) {
        let mut projects = self.projects();
        let Some(idx) = projects.iter().position(|p| p.id == id) else {
            return (None, None);
        };
        let next = (idx + 1 < projects.len()).then(|| projects.remove(idx + 1));
        let previous = (idx > 0).then(|| projects.swap_remove(idx - 1));
        (previous, next)
    }

    pub fn skills(&self) -> Vec<Skill> {
        self.snapshot
            .skills_manifest()
            .map(skills::parse_skills)
            .unwrap_or_default()
    }

    /// Skills grouped by category; groups ordered by first appearance.
    pub fn skills_by_category(&self) -> Vec<SkillGroup> {
        let mut groups: Vec<SkillGroup> = Vec::new();
        for skill in self.skills() {
            match groups.iter_mut().find(|g| g.category == skill.category) {
                Some(group) => group.skills.push(skill),
                None => groups.push(SkillGroup {
                    category: skill.category.clone(),
                    skills: vec![skill],
                }),
            }
        }
        groups
    }

    pub fn achievements(&self) -> Vec<Achievement> {
        self.snapshot
            .achievements()
            .map(sections::parse_achievements)
            .unwrap_or_default()
    }

    pub fn experiences(&self) -> Vec<Experience> {
        self.snapshot
            .responsibilities()
            .map(sections::parse_experiences)
            .unwrap_or_default()
    }

    pub fn contact_info(&self) -> Vec<ContactInfo> {
        contact::contact_info()
    }

    pub fn about(&self) -> AboutData {
        AboutData {
            bio: contact::BIO.to_string(),
            skills: self.skills(),
            experiences: self.experiences(),
            achievements: self.achievements(),
            contact: self.contact_info(),
        }
    }
}
