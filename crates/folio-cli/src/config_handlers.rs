//! Handler functions for config CLI commands.
//!
//! Implements the config subcommands (`path`, `get`, `set`, `init`, `export`)
//! over any type implementing [`ConfigManager`], plus the TOML dotted-key
//! helpers they rely on.

use std::path::PathBuf;

use folio_core::{ConfigManager, Error, Result};

use crate::cli::ConfigAction;
use crate::config::FolioConfig;

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand using [`FolioConfig`].
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path::<FolioConfig>(config_path),
        ConfigAction::Get { key } => cmd_config_get::<FolioConfig>(config_path, &key),
        ConfigAction::Set { key, value } => {
            cmd_config_set::<FolioConfig>(config_path, &key, &value)
        }
        ConfigAction::Init { file, force } => {
            cmd_config_init::<FolioConfig>(file.as_deref().or(config_path), force)
        }
        ConfigAction::Export { docker_env } => {
            let config = FolioConfig::load(config_path)?;
            cmd_config_export(&config, docker_env)
        }
    }
}

// ============================================================================
// Generic command handlers
// ============================================================================

/// Show the resolved config file path.
pub fn cmd_config_path<C: ConfigManager>(config_path: Option<&str>) -> Result<()> {
    let path = C::resolve_config_path(config_path).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!(
            "(file does not exist; run `{} config init` to create it)",
            C::project_name()
        );
    }
    Ok(())
}

/// Print a configuration value by dotted key.
pub fn cmd_config_get<C: ConfigManager>(config_path: Option<&str>, key: &str) -> Result<()> {
    println!("{}", config_value::<C>(config_path, key)?);
    Ok(())
}

/// Look up a configuration value by dotted key, formatted for display.
pub fn config_value<C: ConfigManager>(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = C::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Set a configuration value by dotted key in the config file.
///
/// The edited file must still load as valid configuration; otherwise it is
/// left unchanged.
pub fn cmd_config_set<C: ConfigManager>(
    config_path: Option<&str>,
    key: &str,
    value: &str,
) -> Result<()> {
    let path = C::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `{} config init` first.",
            path.display(),
            C::project_name()
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    set_nested_value(&mut doc, key, parse_value(value))?;

    let toml_str = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    C::from_toml_str(&toml_str)
        .map_err(|e| Error::config(format!("Refusing to set {key} = {value}: {e}")))?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Set {key} = {value} in {}", path.display());
    Ok(())
}

/// Create a default configuration file.
pub fn cmd_config_init<C: ConfigManager>(file: Option<&str>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => C::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let toml_str = C::default().to_toml_string()?;
    std::fs::write(&path, &toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    println!("Config file created at {}", path.display());
    Ok(())
}

/// Export configuration as environment variables.
pub fn cmd_config_export<C: ConfigManager>(config: &C, docker_env: bool) -> Result<()> {
    for line in export_lines(config, docker_env)? {
        println!("{line}");
    }
    Ok(())
}

/// `NAME=value` lines, or `--env NAME=value` for `docker run`.
pub fn export_lines<C: ConfigManager>(config: &C, docker_env: bool) -> Result<Vec<String>> {
    let prefix = if docker_env { "--env " } else { "" };
    Ok(config
        .to_env_vars()?
        .into_iter()
        .map(|(key, value)| format!("{prefix}{key}={value}"))
        .collect())
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    let mut current = value;
    for part in key.split('.') {
        current = current.as_table()?.get(part)?;
    }
    Some(current)
}

/// Set a value at a dotted key path, creating intermediate tables as needed.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    if parts.iter().any(|p| p.is_empty()) {
        return Err(Error::config(format!("Invalid key '{key}'")));
    }

    let (last, parents) = parts
        .split_last()
        .ok_or_else(|| Error::config("Empty key path"))?;

    let mut current = root;
    for part in parents {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?;
        current = table
            .entry(part.to_string())
            .or_insert(toml::Value::Table(toml::map::Map::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?;
    table.insert(last.to_string(), value);
    Ok(())
}

/// Parse a string value into a TOML value, auto-detecting the type.
///
/// Booleans and numbers are recognized; anything else stays a string.
pub fn parse_value(s: &str) -> toml::Value {
    if s == "true" {
        return toml::Value::Boolean(true);
    }
    if s == "false" {
        return toml::Value::Boolean(false);
    }
    if let Ok(i) = s.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(s.to_string())
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_default_config(dir: &tempfile::TempDir) -> String {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, FolioConfig::default().to_toml_string().unwrap()).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn reload(path: &str) -> FolioConfig {
        FolioConfig::from_toml_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_config_value_reads_render_keys() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);

        let class = config_value::<FolioConfig>(Some(&path), "render.entry_class").unwrap();
        assert_eq!(class, "project-entries__project");
        let icon = config_value::<FolioConfig>(Some(&path), "render.repo_icon").unwrap();
        assert_eq!(icon, "fab fa-github");

        let err = config_value::<FolioConfig>(Some(&path), "render.nonexistent").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_config_set_updates_page_and_catalog() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);

        cmd_config_set::<FolioConfig>(Some(&path), "page.title", "My Work").unwrap();
        cmd_config_set::<FolioConfig>(Some(&path), "catalog", "projects.toml").unwrap();

        let config = reload(&path);
        assert_eq!(config.page.title, "My Work");
        assert_eq!(config.catalog.as_deref(), Some("projects.toml"));
    }

    #[test]
    fn test_config_set_refuses_invalid_edits() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_default_config(&dir);
        let before = std::fs::read_to_string(&path).unwrap();

        for (key, value) in [("page.title", "42"), ("render.tech_marker", "icon-x")] {
            let err = cmd_config_set::<FolioConfig>(Some(&path), key, value).unwrap_err();
            assert!(err.to_string().contains("Refusing"), "{key}: {err}");
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_config_set_needs_existing_file() {
        let err = cmd_config_set::<FolioConfig>(Some("/nonexistent/config.toml"), "catalog", "x")
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_config_init_respects_force() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("folio").join("config.toml");
        let path = path.to_str().unwrap();

        cmd_config_init::<FolioConfig>(Some(path), false).unwrap();
        assert_eq!(reload(path), FolioConfig::default());

        std::fs::write(path, "stale").unwrap();
        let err = cmd_config_init::<FolioConfig>(Some(path), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        cmd_config_init::<FolioConfig>(Some(path), true).unwrap();
        assert_eq!(reload(path), FolioConfig::default());
    }

    #[test]
    fn test_export_lines() {
        let config = FolioConfig::default();
        let lines = export_lines(&config, false).unwrap();
        assert!(lines.contains(&"FOLIO_RENDER_CONTAINER_SELECTOR=.project-entries".to_string()));

        let docker = export_lines(&config, true).unwrap();
        assert!(docker.iter().all(|l| l.starts_with("--env FOLIO_")));
    }

    #[test]
    fn test_set_nested_value_paths() {
        let mut val = toml::Value::Table(toml::map::Map::new());
        set_nested_value(&mut val, "page.lang", parse_value("fil")).unwrap();
        assert_eq!(get_nested_value(&val, "page.lang").map(format_toml_value), Some("fil".into()));

        assert!(set_nested_value(&mut val, "page..lang", parse_value("1")).is_err());
        assert!(set_nested_value(&mut val, "page.lang.inner", parse_value("1")).is_err());
    }
}
