mod bundle;
mod config;
mod error;

use std::io::Write;

use portfolio_content::ContentSnapshot;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bundle::ContentBundle;
use config::Config;
use error::AppError;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting portfolio content export");

    let config = Config::from_env()?;
    info!(
        res_path = %config.res_path,
        export_path = config.export_path.as_deref().unwrap_or("-"),
        featured = config.featured_count,
        "configuration loaded"
    );

    let bundle = export(&config)?;
    info!(
        fingerprint = %bundle.fingerprint,
        projects = bundle.projects.len(),
        skills = bundle.skills.len(),
        achievements = bundle.achievements.len(),
        experiences = bundle.experiences.len(),
        "export complete"
    );
    Ok(())
}

fn export(config: &Config) -> Result<ContentBundle, AppError> {
    let snapshot = ContentSnapshot::load(&config.res_path())?;
    let bundle = ContentBundle::build(&snapshot, config.featured_count);
    write_bundle(&bundle, config.export_path.as_deref())?;
    Ok(bundle)
}

fn write_bundle(bundle: &ContentBundle, export_path: Option<&str>) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(bundle)?;
    match export_path {
        Some(path) => std::fs::write(path, json)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_bundle_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("content.json");
        let snapshot = ContentSnapshot::default().with_project("a", Some("Project Title - A"), None);
        let bundle = ContentBundle::build(&snapshot, 4);

        write_bundle(&bundle, out.to_str()).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written["projects"][0]["title"], "A");
        assert_eq!(written["fingerprint"], bundle.fingerprint);
    }
}
