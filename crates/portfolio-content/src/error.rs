use std::path::PathBuf;

/// Errors raised while loading a content tree.
///
/// Parsing never fails: malformed files degrade to defaults and a warning log.
/// Only problems with the content root itself surface as `ContentError`.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("config error: {0}")]
    Config(String),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
