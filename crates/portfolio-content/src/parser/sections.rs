/// Parsers for the free-text sections: `ach.md` and `PoR.md`.
///
/// Both are a single pass that opens a record at a marker line and folds the
/// following lines into it. There is no schema; odd input produces partial
/// records rather than errors.
///
/// `ach.md`:
/// ```text
/// **Winner, Inter-IIT Tech Meet**
/// Built an autonomous rover.
/// Prize - INR 50,000
/// ```
///
/// `PoR.md`:
/// ```text
/// ## Team Lead, Robotics Club
/// _Jan 2023 - Present_
/// Led a team of 12.
/// ```
use crate::model::{Achievement, Experience};

const PRIZE_MARKER: &str = "Prize -";

pub fn parse_achievements(content: &str) -> Vec<Achievement> {
    let mut achievements = Vec::new();
    let mut current: Option<(Achievement, Vec<&str>)> = None;

    let lines = content.lines().filter(|line| !line.trim().is_empty());
    for (idx, line) in lines.enumerate() {
        if line.starts_with("**") {
            if let Some(done) = current.take() {
                achievements.push(finish_achievement(done));
            }
            current = Some((
                Achievement {
                    id: format!("ach-{idx}"),
                    title: line.replace("**", "").trim().to_string(),
                    description: String::new(),
                    prize: None,
                },
                Vec::new(),
            ));
        } else if let Some((achievement, description)) = current.as_mut() {
            if line.starts_with('#') {
                continue;
            }
            match line.trim().strip_prefix(PRIZE_MARKER).map(str::trim) {
                Some(prize) if !prize.is_empty() => achievement.prize = Some(prize.to_string()),
                _ => description.push(line.trim()),
            }
        }
    }

    if let Some(done) = current.take() {
        achievements.push(finish_achievement(done));
    }
    achievements
}

fn finish_achievement((mut achievement, description): (Achievement, Vec<&str>)) -> Achievement {
    achievement.description = description.join(" ");
    achievement
}

pub fn parse_experiences(content: &str) -> Vec<Experience> {
    let mut sections: Vec<Vec<&str>> = Vec::new();

    for line in content.lines() {
        if let Some(heading) = line.strip_prefix("##") {
            sections.push(vec![heading.trim_start_matches('#')]);
        } else if let Some(section) = sections.last_mut() {
            section.push(line);
        }
    }

    sections
        .iter()
        .map(|lines| {
            lines
                .iter()
                .copied()
                .filter(|l| !l.trim().is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|lines| !lines.is_empty())
        .enumerate()
        .map(|(idx, lines)| build_experience(idx, &lines))
        .collect()
}

/// `lines` holds the heading text followed by the raw body lines, none blank.
fn build_experience(idx: usize, lines: &[&str]) -> Experience {
    let heading = lines[0].trim();
    let body = &lines[1..];

    let (role, company) = match heading.split_once(',') {
        Some((role, company)) => {
            let company = company.trim();
            (role.trim(), (!company.is_empty()).then(|| company.to_string()))
        }
        None => (heading, None),
    };

    let mut period = None;
    let mut description = Vec::new();
    for line in body {
        if line.starts_with('_') {
            if period.is_none() {
                period = Some(line.replace('_', "").trim().to_string());
            }
        } else {
            description.push(line.trim());
        }
    }

    Experience {
        id: format!("exp-{idx}"),
        company,
        role: role.to_string(),
        period: period.unwrap_or_default(),
        description: description.join(" "),
    }
}
