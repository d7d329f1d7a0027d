pub mod catalog;
pub mod contact;
pub mod error;
pub mod model;
pub mod parser;
pub mod snapshot;

pub use catalog::{Catalog, DEFAULT_FEATURED_COUNT};
pub use error::ContentError;
pub use model::{
    AboutData, Achievement, ContactInfo, DisplaySettings, Experience, Project, Skill, SkillGroup,
};
pub use snapshot::{ContentSnapshot, ProjectSource};
