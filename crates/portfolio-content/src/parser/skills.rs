/// Parser for `skills/icons.json`.
///
/// Two shapes are accepted:
/// - list: `[{"id": "python", "name": "Python", "category": "Programming", "iconPath": "python.png"}]`
/// - legacy mapping: `{"Python": "python.png", "ESP32": "icons/esp32.svg"}`
///
/// The shape is resolved once during deserialization; each variant then maps
/// through its own pure function.
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::model::Skill;
use crate::parser::slugify;

pub const DEFAULT_SKILL_CATEGORY: &str = "Other";

/// Categories for skill names in the legacy mapping shape.
const LEGACY_CATEGORIES: &[(&str, &str)] = &[
    ("Python", "Programming"),
    ("Numpy", "Programming"),
    ("Scipy", "Programming"),
    ("Sympy", "Programming"),
    ("OpenCV", "Programming"),
    ("Computer Vision", "Programming"),
    ("Ansys", "CAD & Simulation"),
    ("AutoCAD", "CAD & Simulation"),
    ("Fusion 360", "CAD & Simulation"),
    ("Solidworks", "CAD & Simulation"),
    ("CAD", "CAD & Simulation"),
    ("Mechanical Design", "CAD & Simulation"),
    ("ESP32", "Electronics"),
    ("Embedded Firmware", "Electronics"),
    ("EasyEDA", "Electronics"),
];

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SkillsManifest {
    List(Vec<Value>),
    Mapping(Map<String, Value>),
}

/// Fields are kept as raw JSON so one mistyped entry cannot reject the list.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SkillEntry {
    id: Option<Value>,
    name: Option<Value>,
    category: Option<Value>,
    #[serde(rename = "iconPath")]
    icon_path: Option<Value>,
}

/// Parse the skills manifest. Malformed JSON yields an empty list.
pub fn parse_skills(content: &str) -> Vec<Skill> {
    match serde_json::from_str::<SkillsManifest>(content) {
        Ok(SkillsManifest::List(entries)) => skills_from_list(entries),
        Ok(SkillsManifest::Mapping(map)) => skills_from_mapping(map),
        Err(e) => {
            warn!(error = %e, "skills manifest is neither a list nor a mapping, no skills loaded");
            Vec::new()
        }
    }
}

fn skills_from_list(entries: Vec<Value>) -> Vec<Skill> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let entry: SkillEntry = serde_json::from_value(raw)
                .inspect_err(|e| warn!(index = idx, error = %e, "skill entry is not an object, skipping"))
                .ok()?;
            let name = text_field(entry.name.as_ref());
            let id = text_field(entry.id.as_ref());
            let (id, name) = match (id, name) {
                (Some(id), Some(name)) => (id, name),
                (Some(id), None) => (id.clone(), id),
                (None, Some(name)) => (slugify(&name), name),
                (None, None) => {
                    warn!(index = idx, "skill entry has neither id nor name, skipping");
                    return None;
                }
            };
            Some(Skill {
                id,
                name,
                category: text_field(entry.category.as_ref())
                    .unwrap_or_else(|| DEFAULT_SKILL_CATEGORY.to_string()),
                icon_path: normalize_icon_path(&value_to_text(entry.icon_path.as_ref())),
            })
        })
        .collect()
}

fn skills_from_mapping(map: Map<String, Value>) -> Vec<Skill> {
    map.into_iter()
        .map(|(name, raw)| Skill {
            id: slugify(&name),
            category: legacy_category(&name).to_string(),
            icon_path: normalize_icon_path(&value_to_text(Some(&raw))),
            name,
        })
        .collect()
}

fn legacy_category(name: &str) -> &'static str {
    LEGACY_CATEGORIES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_SKILL_CATEGORY)
}

/// Coerced text of an entry field, `None` when missing or blank.
fn text_field(value: Option<&Value>) -> Option<String> {
    let text = value_to_text(value);
    (!text.trim().is_empty()).then_some(text)
}

fn value_to_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Resolve an icon reference to a root-absolute path.
///
/// - "/anything" → unchanged
/// - "res/..." or "skills/..." → "/res/..." or "/skills/..."
/// - "icons/x.svg" → "/skills/icons/x.svg"
/// - "x.svg" → "/skills/icons/x.svg"
pub fn normalize_icon_path(raw: &str) -> String {
    let raw = raw.trim();
    if raw.starts_with('/') {
        raw.to_string()
    } else if raw.starts_with("res/") || raw.starts_with("skills/") {
        format!("/{raw}")
    } else if raw.starts_with("icons/") {
        format!("/skills/{raw}")
    } else {
        format!("/skills/icons/{raw}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_mapping_derives_id_and_category() {
        let skills = parse_skills(r#"{"Python": "python.png"}"#);
        assert_eq!(
            skills,
            vec![Skill {
                id: "python".to_string(),
                name: "Python".to_string(),
                category: "Programming".to_string(),
                icon_path: "/skills/icons/python.png".to_string(),
            }]
        );
    }

    #[test]
    fn legacy_mapping_keeps_key_order_and_defaults_category() {
        let skills = parse_skills(r#"{"Fusion 360": "icons/f360.svg", "Welding": null, "ESP32": "/chip.svg"}"#);
        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Fusion 360", "Welding", "ESP32"]);

        assert_eq!(skills[0].id, "fusion-360");
        assert_eq!(skills[0].category, "CAD & Simulation");
        assert_eq!(skills[0].icon_path, "/skills/icons/f360.svg");
        assert_eq!(skills[1].category, DEFAULT_SKILL_CATEGORY);
        assert_eq!(skills[1].icon_path, "/skills/icons/");
        assert_eq!(skills[2].category, "Electronics");
        assert_eq!(skills[2].icon_path, "/chip.svg");
    }

    #[test]
    fn list_shape_normalizes_icon_only() {
        let skills = parse_skills(
            r#"[
                {"id": "cad", "name": "CAD", "category": "Design", "iconPath": "skills/cad.svg"},
                {"id": "py", "name": "Python", "iconPath": " res/py.png "}
            ]"#,
        );
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].category, "Design");
        assert_eq!(skills[0].icon_path, "/skills/cad.svg");
        assert_eq!(skills[1].id, "py");
        assert_eq!(skills[1].category, DEFAULT_SKILL_CATEGORY);
        assert_eq!(skills[1].icon_path, "/res/py.png");
    }

    #[test]
    fn list_entries_fill_missing_identity() {
        let skills = parse_skills(r#"[{"name": "Computer Vision"}, {"id": "git"}, {"category": "x"}]"#);
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].id, "computer-vision");
        assert_eq!(skills[1].name, "git");
    }

    #[test]
    fn mistyped_list_entry_keeps_the_rest() {
        let skills = parse_skills(
            r#"[
                {"id": "py", "name": "Python", "iconPath": "py.png"},
                {"id": 7, "name": "CAD", "category": ["x"], "iconPath": "cad.svg"},
                "not an object",
                {"name": "Git", "category": null}
            ]"#,
        );
        let ids: Vec<&str> = skills.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["py", "7", "git"]);
        assert_eq!(skills[0].name, "Python");
        assert_eq!(skills[1].name, "CAD");
        assert_eq!(skills[1].category, r#"["x"]"#);
        assert_eq!(skills[1].icon_path, "/skills/icons/cad.svg");
        assert_eq!(skills[2].category, DEFAULT_SKILL_CATEGORY);
    }

    #[test]
    fn malformed_json_yields_no_skills() {
        assert!(parse_skills("{not json").is_empty());
        assert!(parse_skills("42").is_empty());
    }

    #[test]
    fn icon_path_precedence() {
        assert_eq!(normalize_icon_path("/abs/x.png"), "/abs/x.png");
        assert_eq!(normalize_icon_path("res/x.png"), "/res/x.png");
        assert_eq!(normalize_icon_path("skills/x.png"), "/skills/x.png");
        assert_eq!(normalize_icon_path("icons/x.png"), "/skills/icons/x.png");
        assert_eq!(normalize_icon_path("x.png"), "/skills/icons/x.png");
    }
}
