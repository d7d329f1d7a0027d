/// Parser for per-project `init.md` files.
///
/// The file is a list of `<Field> - <value>` lines:
///
/// ```text
/// Project Title - Line Follower (2023)
/// Project Brief - PID-tuned line following robot
/// Project Image - cover.png
/// Project Tags - ESP32 Firmware, Python Vision
/// ```
///
/// Blank lines and lines holding an HTML comment are ignored. Each line maps to
/// at most one field: the first marker from `INIT_FIELDS` that the line contains.
/// Lines without a marker are skipped.
use regex::Regex;
use tracing::{debug, warn};

use crate::model::Project;
use crate::parser::{split_list, value_after};

pub const DEFAULT_YEAR: &str = "2024";
pub const DEFAULT_CATEGORY: &str = "Engineering";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InitField {
    Title,
    Brief,
    Image,
    Tags,
    Year,
    Category,
    Client,
    Role,
    Duration,
}

const INIT_FIELDS: &[(&str, InitField)] = &[
    ("Project Title -", InitField::Title),
    ("Project Brief -", InitField::Brief),
    ("Project Image -", InitField::Image),
    ("Project Tags -", InitField::Tags),
    ("Year -", InitField::Year),
    ("Category -", InitField::Category),
    ("Client -", InitField::Client),
    ("Role -", InitField::Role),
    ("Duration -", InitField::Duration),
];

/// Tag keywords (lower case) and the category they imply, in check order.
const CATEGORY_KEYWORDS: &[(&[&str], &str)] = &[
    (&["firmware", "embedded"], "Embedded Systems"),
    (&["vision", "python"], "Software"),
    (&["mechanical", "design"], "Mechanical Design"),
    (&["actuation", "cnc"], "Mechatronics"),
];

/// Fields exactly as authored, before defaults and derivation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InitFields {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Raw image reference, resolved later against the project id
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub year: Option<String>,
    pub categories: Option<Vec<String>>,
    pub client: Option<String>,
    pub role: Option<String>,
    pub duration: Option<String>,
}

/// Parse an `init.md` body.
///
/// Returns `None` when no line carries a recognized field marker; such a file
/// does not describe a project.
pub fn parse_init(content: &str) -> Option<InitFields> {
    let mut fields = InitFields::default();
    let mut recognized = false;

    for line in content.lines() {
        if line.trim().is_empty() || line.contains("<!--") {
            continue;
        }
        let Some((field, value)) = classify_line(line) else {
            continue;
        };
        recognized = true;

        match field {
            InitField::Title => fields.title = non_empty(value),
            InitField::Brief => fields.description = non_empty(value),
            InitField::Image => fields.image = non_empty(value),
            InitField::Tags => fields.tags = Some(split_list(value)),
            InitField::Year => fields.year = non_empty(value),
            InitField::Category => {
                let categories = split_list(value);
                fields.categories = (!categories.is_empty()).then_some(categories);
            }
            InitField::Client => fields.client = non_empty(value),
            InitField::Role => fields.role = non_empty(value),
            InitField::Duration => fields.duration = non_empty(value),
        }
    }

    recognized.then_some(fields)
}

fn classify_line(line: &str) -> Option<(InitField, &str)> {
    INIT_FIELDS
        .iter()
        .find_map(|(marker, field)| value_after(line, marker).map(|value| (*field, value)))
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Apply defaults and derived fields to produce a complete `Project`.
pub fn build_project(project_id: &str, fields: InitFields, details: Option<&str>) -> Project {
    let year = resolve_year(project_id, fields.year.as_deref(), fields.title.as_deref());
    let tags = fields.tags.unwrap_or_default();
    let categories = fields
        .categories
        .unwrap_or_else(|| derive_categories(&tags));
    let image = fields
        .image
        .map(|raw| resolve_image(&raw, project_id))
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    Project {
        id: project_id.to_string(),
        title: fields.title.unwrap_or_else(|| project_id.to_string()),
        categories,
        description: fields.description.unwrap_or_default(),
        image,
        year,
        tags,
        details_markdown: details.unwrap_or_default().to_string(),
        client: fields.client,
        role: fields.role,
        duration: fields.duration,
    }
}

/// Resolve an authored image reference to a root-absolute path.
///
/// - "/res/projects/x/a.png" → "/projects/x/a.png" (other absolute paths unchanged)
/// - "res/projects/x/a.png" → "/projects/x/a.png"
/// - "projects/x/a.png" → "/projects/x/a.png"
/// - "a.png" → "/projects/<id>/res/a.png"
pub fn resolve_image(raw: &str, project_id: &str) -> String {
    if raw.starts_with('/') {
        match raw.strip_prefix("/res/") {
            Some(rest) => format!("/{rest}"),
            None => raw.to_string(),
        }
    } else if let Some(rest) = raw.strip_prefix("res/") {
        format!("/{rest}")
    } else if raw.starts_with("projects/") {
        format!("/{raw}")
    } else {
        format!("/projects/{project_id}/res/{raw}")
    }
}

/// Authored year if it is four digits, else a "(dddd)" token in the title, else `DEFAULT_YEAR`.
pub fn resolve_year(project_id: &str, authored: Option<&str>, title: Option<&str>) -> String {
    let four_digits = Regex::new(r"^\d{4}$").expect("valid regex");
    let title_year = Regex::new(r"\((\d{4})\)").expect("valid regex");

    if let Some(year) = authored {
        if four_digits.is_match(year) {
            return year.to_string();
        }
        warn!(project = project_id, year, "ignoring year that is not four digits");
    }

    if let Some(caps) = title.and_then(|t| title_year.captures(t)) {
        debug!(project = project_id, "year taken from title");
        return caps[1].to_string();
    }

    DEFAULT_YEAR.to_string()
}

/// Derive categories from tags by keyword.
///
/// Each keyword group contributes at most one category, in `CATEGORY_KEYWORDS`
/// order regardless of tag order. Falls back to `DEFAULT_CATEGORY`.
pub fn derive_categories(tags: &[String]) -> Vec<String> {
    let lowered: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();

    let mut categories: Vec<String> = CATEGORY_KEYWORDS
        .iter()
        .filter(|(keywords, _)| {
            lowered
                .iter()
                .any(|tag| keywords.iter().any(|kw| tag.contains(kw)))
        })
        .map(|(_, category)| category.to_string())
        .collect();

    if categories.is_empty() {
        categories.push(DEFAULT_CATEGORY.to_string());
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_full_init() {
        let content = r#"<!-- project card -->
Project Title - Line Follower (2023)
Project Brief - PID-tuned line following robot

Project Image - cover.png
Project Tags - ESP32 Firmware, Python Vision
Category - Mechatronics, Software
Client - Robotics Club
Role - Lead
Duration - 3 months
"#;
        let fields = parse_init(content).unwrap();
        assert_eq!(fields.title.as_deref(), Some("Line Follower (2023)"));
        assert_eq!(fields.description.as_deref(), Some("PID-tuned line following robot"));
        assert_eq!(fields.image.as_deref(), Some("cover.png"));
        assert_eq!(fields.tags, Some(tags(&["ESP32 Firmware", "Python Vision"])));
        assert_eq!(fields.categories, Some(tags(&["Mechatronics", "Software"])));
        assert_eq!(fields.client.as_deref(), Some("Robotics Club"));
        assert_eq!(fields.role.as_deref(), Some("Lead"));
        assert_eq!(fields.duration.as_deref(), Some("3 months"));
        assert_eq!(fields.year, None);
    }

    #[test]
    fn first_marker_in_table_order_wins() {
        let fields = parse_init("Project Title - Role - Year - in one line").unwrap();
        assert_eq!(fields.title.as_deref(), Some("Role - Year - in one line"));
        assert_eq!(fields.role, None);
        assert_eq!(fields.year, None);
    }

    #[test]
    fn comment_lines_are_ignored() {
        let fields = parse_init("<!-- Project Title - hidden -->\nProject Title - shown").unwrap();
        assert_eq!(fields.title.as_deref(), Some("shown"));
    }

    #[test]
    fn no_markers_means_no_project() {
        assert_eq!(parse_init("just some notes\n\nabout a project"), None);
        assert_eq!(parse_init(""), None);
    }

    #[test]
    fn empty_category_line_counts_as_absent() {
        let fields = parse_init("Category - , \nProject Tags - CNC router").unwrap();
        assert_eq!(fields.categories, None);
        let project = build_project("router", fields, None);
        assert_eq!(project.categories, vec!["Mechatronics"]);
    }

    #[test]
    fn authored_categories_keep_order() {
        let fields = parse_init("Category - Mechatronics, Software").unwrap();
        let project = build_project("p", fields, None);
        assert_eq!(project.categories, vec!["Mechatronics", "Software"]);
    }

    #[test]
    fn derived_categories_follow_check_order() {
        assert_eq!(
            derive_categories(&tags(&["Python Vision", "ESP32 Firmware"])),
            vec!["Embedded Systems", "Software"]
        );
        assert_eq!(
            derive_categories(&tags(&["CNC", "Mechanical", "Embedded C", "Design review"])),
            vec!["Embedded Systems", "Mechanical Design", "Mechatronics"]
        );
    }

    #[test]
    fn derived_categories_default_when_nothing_matches() {
        assert_eq!(derive_categories(&tags(&["Welding"])), vec![DEFAULT_CATEGORY]);
        assert_eq!(derive_categories(&[]), vec![DEFAULT_CATEGORY]);
    }

    #[test]
    fn resolve_image_prefixes() {
        assert_eq!(resolve_image("wheel.png", "cart"), "/projects/cart/res/wheel.png");
        assert_eq!(resolve_image("/res/projects/cart/a.png", "cart"), "/projects/cart/a.png");
        assert_eq!(resolve_image("/images/a.png", "cart"), "/images/a.png");
        assert_eq!(resolve_image("res/projects/cart/a.png", "cart"), "/projects/cart/a.png");
        assert_eq!(resolve_image("projects/cart/res/a.png", "cart"), "/projects/cart/res/a.png");
    }

    #[test]
    fn resolve_year_precedence() {
        assert_eq!(resolve_year("p", Some("2021"), Some("Bot (2019)")), "2021");
        assert_eq!(resolve_year("p", None, Some("Bot (2019)")), "2019");
        assert_eq!(resolve_year("p", Some("21"), Some("Bot (2019)")), "2019");
        assert_eq!(resolve_year("p", Some("soon"), Some("Bot")), DEFAULT_YEAR);
        assert_eq!(resolve_year("p", None, None), DEFAULT_YEAR);
    }

    #[test]
    fn build_project_applies_defaults() {
        let fields = parse_init("Project Tags - Welding").unwrap();
        let project = build_project("bench", fields, None);
        assert_eq!(project.title, "bench");
        assert_eq!(project.description, "");
        assert_eq!(project.image, PLACEHOLDER_IMAGE);
        assert_eq!(project.year, DEFAULT_YEAR);
        assert_eq!(project.categories, vec![DEFAULT_CATEGORY]);
        assert_eq!(project.details_markdown, "");
        assert_eq!(project.client, None);
    }

    #[test]
    fn build_project_attaches_details() {
        let fields = parse_init("Project Title - Cart\nProject Image - wheel.png").unwrap();
        let project = build_project("cart", fields, Some("# Cart\n\nDetails."));
        assert_eq!(project.image, "/projects/cart/res/wheel.png");
        assert_eq!(project.details_markdown, "# Cart\n\nDetails.");
    }
}
