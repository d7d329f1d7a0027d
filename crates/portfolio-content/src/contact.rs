//! Fixed site-owner details. These are not read from content files.
use crate::model::ContactInfo;

pub const BIO: &str = "Mechanical Engineering student at IIT Bombay with a passion for robotics, \
embedded systems, and computational engineering. Experienced in CAD design, Python programming, \
and experimental analysis.";

const CONTACTS: &[(&str, &str, Option<&str>)] = &[
    ("Email", "vardaansriv@gmail.com", Some("mailto:vardaansriv@gmail.com")),
    ("GitHub", "VardaanCodes", Some("https://github.com/VardaanCodes")),
    (
        "LinkedIn",
        "vardaan-srivastava",
        Some("https://linkedin.com/in/vardaan-srivastava"),
    ),
];

pub fn contact_info() -> Vec<ContactInfo> {
    CONTACTS
        .iter()
        .map(|(label, value, href)| ContactInfo {
            label: label.to_string(),
            value: value.to_string(),
            href: href.map(str::to_string),
        })
        .collect()
}
