use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigPathError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
}

pub(crate) const APP_DIR: &str = "dashshell";
const APP_CONFIG_FILE: &str = "config.json";

/// Application-level settings from `config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Directory holding the preference slots; defaults to the app config dir.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
    /// Fallback `tracing` filter directive when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_filter: Option<String>,
}

pub fn load_app_config() -> AppConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_app_config_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_app_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    let path = match app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home) {
        Ok(p) => p,
        Err(_) => return AppConfig::default(),
    };
    if !path.exists() {
        return AppConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(?err, ?path, "failed to parse config.json; using defaults");
            AppConfig::default()
        }),
        Err(err) => {
            tracing::warn!(?err, ?path, "failed to read config.json; using defaults");
            AppConfig::default()
        }
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = app_config_dir(app_dir, xdg_config_home, home)?;
    path.push(file_name);
    Ok(path)
}

pub fn app_config_dir(
    app_dir: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        path.push(format!("dashshell-config-{}-{nanos}", std::process::id()));
        path
    }

    #[test]
    fn app_config_path_prefers_xdg_config_home() {
        let path = app_config_path(
            "dashshell",
            "ui-preferences.json",
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(
            path,
            PathBuf::from("/tmp/config-root/dashshell/ui-preferences.json")
        );
    }

    #[test]
    fn app_config_path_ignores_empty_xdg_config_home() {
        let path = app_config_path(
            "dashshell",
            "config.json",
            Some(Path::new("")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/home/.config/dashshell/config.json"));
    }

    #[test]
    fn app_config_path_errors_when_home_missing_and_xdg_unset() {
        let error = app_config_path("dashshell", "config.json", None, None).unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn app_config_reads_storage_dir_and_log_filter() {
        let root = fixture_root();
        let dir = root.join(APP_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(APP_CONFIG_FILE),
            r#"{"storage_dir": "/var/lib/dash", "log_filter": "dashshell=debug"}"#,
        )
        .unwrap();

        let config = load_app_config_with(Some(&root), None);
        assert_eq!(config.storage_dir, Some(PathBuf::from("/var/lib/dash")));
        assert_eq!(config.log_filter.as_deref(), Some("dashshell=debug"));

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn app_config_falls_back_to_defaults_on_invalid_json() {
        let root = fixture_root();
        let dir = root.join(APP_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(APP_CONFIG_FILE), "{ not json").unwrap();

        let config = load_app_config_with(Some(&root), None);
        assert!(config.storage_dir.is_none());
        assert!(config.log_filter.is_none());

        let _ = fs::remove_dir_all(&root);
    }
}
