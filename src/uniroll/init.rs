use crate::api::RosterApi;
use crate::config::RosterConfig;
use crate::database::Database;
use crate::error::{Result, RosterError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the data directory when set.
pub const HOME_ENV: &str = "UNIROLL_HOME";

pub struct RosterContext {
    pub api: RosterApi<FileStore>,
    pub config: RosterConfig,
}

/// Picks the directory holding `students.data` and `config.json`.
///
/// Precedence: explicit directory, then `UNIROLL_HOME`, then the platform data
/// directory when `use_global` is set, else the working directory.
pub fn resolve_data_dir(
    cwd: &Path,
    explicit: Option<&Path>,
    env_home: Option<PathBuf>,
    use_global: bool,
) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(absolutize(cwd, dir));
    }
    if let Some(dir) = env_home.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(absolutize(cwd, &dir));
    }
    if use_global {
        let proj_dirs = ProjectDirs::from("com", "uniroll", "uniroll").ok_or_else(|| {
            RosterError::Config("Could not determine the platform data directory".to_string())
        })?;
        return Ok(proj_dirs.data_dir().to_path_buf());
    }
    Ok(cwd.to_path_buf())
}

fn absolutize(cwd: &Path, dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        cwd.join(dir)
    }
}

/// Builds the process-wide roster: reads config, opens the file store and loads it.
pub fn initialize(cwd: &Path, explicit: Option<&Path>, use_global: bool) -> Result<RosterContext> {
    let env_home = std::env::var_os(HOME_ENV).map(PathBuf::from);
    let data_dir = resolve_data_dir(cwd, explicit, env_home, use_global)?;

    let config = RosterConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!("ignoring unreadable config in {}: {}", data_dir.display(), e);
        RosterConfig::default()
    });

    let store = FileStore::new(config.data_path(&data_dir));
    tracing::debug!(path = %store.path().display(), "opening roster");
    let api = RosterApi::new(Database::open(store), data_dir);

    Ok(RosterContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_dir_wins() {
        let cwd = Path::new("/work");
        let dir = resolve_data_dir(
            cwd,
            Some(Path::new("data")),
            Some(PathBuf::from("/env")),
            true,
        )
        .unwrap();
        assert_eq!(dir, PathBuf::from("/work/data"));
    }

    #[test]
    fn env_home_beats_cwd() {
        let dir = resolve_data_dir(Path::new("/work"), None, Some(PathBuf::from("/env")), false)
            .unwrap();
        assert_eq!(dir, PathBuf::from("/env"));
    }

    #[test]
    fn empty_env_home_is_ignored() {
        let dir =
            resolve_data_dir(Path::new("/work"), None, Some(PathBuf::new()), false).unwrap();
        assert_eq!(dir, PathBuf::from("/work"));
    }

    #[test]
    fn defaults_to_cwd() {
        let dir = resolve_data_dir(Path::new("/work"), None, None, false).unwrap();
        assert_eq!(dir, PathBuf::from("/work"));
    }

    #[test]
    fn initialize_honours_configured_file_name() {
        let temp = TempDir::new().unwrap();
        let mut config = RosterConfig::default();
        config.set("data-file", "cohort.data").unwrap();
        config.save(temp.path()).unwrap();

        let mut ctx = initialize(temp.path(), Some(temp.path()), false).unwrap();
        ctx.api
            .register("a.b@university.com", "Abcdef123", "A B")
            .unwrap();
        assert!(temp.path().join("cohort.data").exists());
        assert!(!temp.path().join("students.data").exists());
    }

    #[test]
    fn malformed_roster_starts_empty() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("students.data"), "[{ broken").unwrap();

        let ctx = initialize(temp.path(), Some(temp.path()), false).unwrap();
        assert!(ctx.api.database().is_empty());
    }
}
