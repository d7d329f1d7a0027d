/// Immutable snapshot of every raw content source.
///
/// Layout of a resource root:
/// - `projects/<id>/init.md`, `projects/<id>/Details.md`
/// - `projects/Display.md`
/// - `ach.md`, `PoR.md`
/// - `skills/icons.json`
///
/// Missing files are recorded as absent; the catalog substitutes defaults.
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::error::ContentError;

/// Raw sources for one project folder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSource {
    pub init: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSnapshot {
    /// Keyed by folder name; iteration order is the enumeration order.
    projects: BTreeMap<String, ProjectSource>,
    display: Option<String>,
    achievements: Option<String>,
    responsibilities: Option<String>,
    skills_manifest: Option<String>,
}

impl ContentSnapshot {
    /// Read a resource root from disk.
    pub fn load(res_root: &Path) -> Result<Self, ContentError> {
        if !res_root.is_dir() {
            return Err(ContentError::Config(format!(
                "content root is not a directory: {}",
                res_root.display()
            )));
        }

        let projects_dir = res_root.join("projects");
        let mut projects = BTreeMap::new();
        match std::fs::read_dir(&projects_dir) {
            Ok(entries) => {
                for entry in entries {
                    let entry = entry.map_err(|source| ContentError::Io {
                        path: projects_dir.clone(),
                        source,
                    })?;
                    let path = entry.path();
                    if !path.is_dir() {
                        continue;
                    }
                    let Some(id) = path.file_name().and_then(|n| n.to_str()) else {
                        warn!(path = %path.display(), "skipping project folder with non UTF-8 name");
                        continue;
                    };
                    let source = ProjectSource {
                        init: read_optional(&path.join("init.md")),
                        details: read_optional(&path.join("Details.md")),
                    };
                    projects.insert(id.to_string(), source);
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %projects_dir.display(), "no projects directory");
            }
            Err(source) => {
                return Err(ContentError::Io {
                    path: projects_dir,
                    source,
                })
            }
        }

        let snapshot = Self {
            projects,
            display: read_optional(&projects_dir.join("Display.md")),
            achievements: read_optional(&res_root.join("ach.md")),
            responsibilities: read_optional(&res_root.join("PoR.md")),
            skills_manifest: read_optional(&res_root.join("skills").join("icons.json")),
        };
        info!(
            root = %res_root.display(),
            projects = snapshot.projects.len(),
            "content snapshot loaded"
        );
        Ok(snapshot)
    }

    pub fn with_project(
        mut self,
        id: impl Into<String>,
        init: Option<&str>,
        details: Option<&str>,
    ) -> Self {
        self.projects.insert(
            id.into(),
            ProjectSource {
                init: init.map(str::to_string),
                details: details.map(str::to_string),
            },
        );
        self
    }

    pub fn with_display(mut self, content: impl Into<String>) -> Self {
        self.display = Some(content.into());
        self
    }

    pub fn with_achievements(mut self, content: impl Into<String>) -> Self {
        self.achievements = Some(content.into());
        self
    }

    pub fn with_responsibilities(mut self, content: impl Into<String>) -> Self {
        self.responsibilities = Some(content.into());
        self
    }

    pub fn with_skills_manifest(mut self, content: impl Into<String>) -> Self {
        self.skills_manifest = Some(content.into());
        self
    }

    pub fn projects(&self) -> impl Iterator<Item = (&str, &ProjectSource)> {
        self.projects.iter().map(|(id, source)| (id.as_str(), source))
    }

    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }

    pub fn achievements(&self) -> Option<&str> {
        self.achievements.as_deref()
    }

    pub fn responsibilities(&self) -> Option<&str> {
        self.responsibilities.as_deref()
    }

    pub fn skills_manifest(&self) -> Option<&str> {
        self.skills_manifest.as_deref()
    }

    /// SHA-256 over all sources in a fixed order, hex encoded.
    ///
    /// Absent and empty sources hash differently.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for (id, source) in &self.projects {
            hash_part(&mut hasher, "project", Some(id));
            hash_part(&mut hasher, "init", source.init.as_deref());
            hash_part(&mut hasher, "details", source.details.as_deref());
        }
        hash_part(&mut hasher, "display", self.display.as_deref());
        hash_part(&mut hasher, "ach", self.achievements.as_deref());
        hash_part(&mut hasher, "por", self.responsibilities.as_deref());
        hash_part(&mut hasher, "skills", self.skills_manifest.as_deref());
        format!("{:x}", hasher.finalize())
    }
}

fn hash_part(hasher: &mut Sha256, label: &str, value: Option<&str>) {
    hasher.update(label.as_bytes());
    match value {
        Some(v) => {
            hasher.update(b"=");
            hasher.update(v.len().to_string().as_bytes());
            hasher.update(b":");
            hasher.update(v.as_bytes());
        }
        None => hasher.update(b"!"),
    }
    hasher.update(b"|");
}

fn read_optional(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            warn!(error = %e, path = %path.display(), "unreadable content file, treating as absent");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_content_sensitive() {
        let a = ContentSnapshot::default()
            .with_project("a", Some("Project Title - A"), None)
            .with_display("Display order - a");
        let b = a.clone();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);

        let changed = a.clone().with_display("Display order - a ");
        assert_ne!(a.fingerprint(), changed.fingerprint());
    }

    #[test]
    fn fingerprint_distinguishes_absent_from_empty() {
        let absent = ContentSnapshot::default();
        let empty = ContentSnapshot::default().with_achievements("");
        assert_ne!(absent.fingerprint(), empty.fingerprint());
    }

    #[test]
    fn projects_enumerate_in_id_order() {
        let snapshot = ContentSnapshot::default()
            .with_project("zeta", None, None)
            .with_project("alpha", None, None);
        let ids: Vec<&str> = snapshot.projects().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn load_rejects_missing_root() {
        let err = ContentSnapshot::load(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, ContentError::Config(_)));
    }
}
