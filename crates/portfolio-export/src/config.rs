use std::path::{Path, PathBuf};

use portfolio_content::DEFAULT_FEATURED_COUNT;

use crate::error::AppError;

/// Export configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Resource root holding `projects/`, `skills/`, `ach.md` and `PoR.md`.
    pub res_path: String,
    /// Output file for the bundle. `None` writes to stdout.
    pub export_path: Option<String>,
    /// Number of projects in the featured list.
    pub featured_count: usize,
}

impl Config {
    /// Required:
    /// - `PORTFOLIO_RES_PATH`: path to the content resource root
    ///
    /// Optional:
    /// - `PORTFOLIO_EXPORT_PATH`: bundle output file (default: stdout)
    /// - `PORTFOLIO_FEATURED_COUNT`: positive integer (default: 4)
    pub fn from_env() -> Result<Self, AppError> {
        let res_path = std::env::var("PORTFOLIO_RES_PATH").map_err(|_| {
            AppError::Config("PORTFOLIO_RES_PATH environment variable is required".to_string())
        })?;

        let featured_count = std::env::var("PORTFOLIO_FEATURED_COUNT").ok();
        Self::new(
            res_path,
            std::env::var("PORTFOLIO_EXPORT_PATH").ok(),
            featured_count.as_deref(),
        )
    }

    fn new(
        res_path: String,
        export_path: Option<String>,
        featured_count: Option<&str>,
    ) -> Result<Self, AppError> {
        if !Path::new(&res_path).is_dir() {
            return Err(AppError::Config(format!(
                "content root not found: {res_path}"
            )));
        }

        let featured_count = match featured_count {
            None => DEFAULT_FEATURED_COUNT,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(AppError::Config(format!(
                        "PORTFOLIO_FEATURED_COUNT must be a positive integer, got {raw:?}"
                    )))
                }
            },
        };

        Ok(Self {
            res_path,
            export_path: export_path.filter(|p| !p.trim().is_empty()),
            featured_count,
        })
    }

    pub fn res_path(&self) -> PathBuf {
        Path::new(&self.res_path).to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> String {
        std::env::temp_dir().to_string_lossy().to_string()
    }

    #[test]
    fn defaults_apply() {
        let config = Config::new(root(), None, None).unwrap();
        assert_eq!(config.featured_count, DEFAULT_FEATURED_COUNT);
        assert_eq!(config.export_path, None);
    }

    #[test]
    fn blank_export_path_means_stdout() {
        let config = Config::new(root(), Some("  ".to_string()), Some("6")).unwrap();
        assert_eq!(config.export_path, None);
        assert_eq!(config.featured_count, 6);
    }

    #[test]
    fn rejects_bad_featured_count() {
        assert!(matches!(
            Config::new(root(), None, Some("0")),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            Config::new(root(), None, Some("lots")),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn rejects_missing_root() {
        assert!(matches!(
            Config::new("/definitely/not/here".to_string(), None, None),
            Err(AppError::Config(_))
        ));
    }
}
