//! # Teachbot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for Teachbot, handling
//! loading, merging, validation, and access to configuration data. It combines
//! defaults, user settings, project-specific overrides and command-line flags.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags / environment variables (`--kb`, `--threshold`)
//! 2. Project-specific `.teachbot.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/teachbot/config.toml`
//! 4. Default values defined in the code
//!
//! Paths are expanded (`~` to home directory) and the merged result is
//! validated before use.
//!
//! ## Examples
//!
//! ```toml
//! [knowledge_base]
//! path = "~/.local/share/teachbot/knowledge_base.json"
//!
//! [matching]
//! threshold = 0.6
//!
//! [chat]
//! bot_name = "Bot"
//! ```
//!
use crate::core::error::{Result, TeachbotError};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The resolved configuration every command runs with.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub knowledge_base: KnowledgeBaseConfig,
    pub matching: MatchingConfig,
    pub chat: ChatConfig,
}

/// Where the knowledge base lives on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBaseConfig {
    /// Path to the JSON file, with `~` already expanded.
    pub path: PathBuf,
}

/// Approximate-match tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingConfig {
    /// Minimum similarity (0.0..=1.0) for a stored question to count as a match.
    pub threshold: f64,
}

/// Interactive session presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// Label printed in front of the bot's replies.
    pub bot_name: String,
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_KB_PATH),
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: DEFAULT_BOT_NAME.to_string(),
        }
    }
}

/// One TOML configuration file as written. Keys left out stay `None`, so a
/// file that spells out a default still overrides the layer below it.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    knowledge_base: KnowledgeBaseSection,
    #[serde(default)]
    matching: MatchingSection,
    #[serde(default)]
    chat: ChatSection,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct KnowledgeBaseSection {
    /// Path to the JSON file (can use ~). Will be expanded.
    path: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct MatchingSection {
    threshold: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ChatSection {
    bot_name: Option<String>,
}

/// Values supplied on the command line (or via their environment variables).
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub knowledge_base: Option<PathBuf>,
    pub threshold: Option<f64>,
}

impl Config {
    /// The expanded knowledge-base path.
    pub fn knowledge_base_path(&self) -> PathBuf {
        self.knowledge_base.path.clone()
    }
}

pub const DEFAULT_THRESHOLD: f64 = 0.6;
const DEFAULT_KB_PATH: &str = "knowledge_base.json";
const DEFAULT_BOT_NAME: &str = "Bot";

const PROJECT_CONFIG_FILENAME: &str = ".teachbot.toml";

/// Loads, merges, expands and validates the configuration.
pub fn load_config(overrides: &ConfigOverrides) -> Result<Config> {
    let user_config = load_user_config()?;
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let project_config = load_project_config(&current_dir)?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    apply_overrides(&mut merged_config, overrides);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Teachbot", "teachbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<ConfigFile>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.teachbot.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Every key the project file sets wins over the user file; defaults fill the rest.
fn merge_configs(user: ConfigFile, project: Option<ConfigFile>) -> Config {
    let project = project.unwrap_or_default();
    let mut merged = Config::default();
    if let Some(path) = project.knowledge_base.path.or(user.knowledge_base.path) {
        merged.knowledge_base.path = PathBuf::from(path);
    }
    if let Some(threshold) = project.matching.threshold.or(user.matching.threshold) {
        merged.matching.threshold = threshold;
    }
    if let Some(bot_name) = project.chat.bot_name.or(user.chat.bot_name) {
        merged.chat.bot_name = bot_name;
    }
    merged
}

fn apply_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(path) = &overrides.knowledge_base {
        debug!("Knowledge base path overridden: {}", path.display());
        config.knowledge_base.path = path.clone();
    }
    if let Some(threshold) = overrides.threshold {
        debug!("Similarity threshold overridden: {}", threshold);
        config.matching.threshold = threshold;
    }
}

/// Expands a leading `~`. Paths that are not valid UTF-8 are kept byte for byte.
fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(raw) = config.knowledge_base.path.to_str() {
        let expanded = PathBuf::from(shellexpand::tilde(raw).into_owned());
        config.knowledge_base.path = expanded;
    }
    debug!(
        "Expanded knowledge base path: {}",
        config.knowledge_base.path.display()
    );
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    let threshold = config.matching.threshold;
    if !(0.0..=1.0).contains(&threshold) {
        return Err(anyhow!(TeachbotError::Config(format!(
            "Similarity threshold {} is outside the range 0.0..=1.0.",
            threshold
        ))));
    }
    let kb_path = &config.knowledge_base.path;
    if kb_path.to_string_lossy().trim().is_empty() {
        return Err(anyhow!(TeachbotError::Config(
            "Knowledge base path cannot be empty.".to_string()
        )));
    }
    if kb_path.is_dir() {
        return Err(anyhow!(TeachbotError::Config(format!(
            "Knowledge base path '{}' is a directory.",
            kb_path.display()
        ))));
    }
    if config.chat.bot_name.trim().is_empty() {
        return Err(anyhow!(TeachbotError::Config(
            "Bot name cannot be empty.".to_string()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(toml_content: &str) -> ConfigFile {
        toml::from_str(toml_content).expect("Failed to parse TOML")
    }

    #[test]
    fn test_deserialize_basic_toml() {
        let file = parse(
            r#"
            [knowledge_base]
            path = "~/kb/answers.json"

            [matching]
            threshold = 0.75
        "#,
        );

        assert_eq!(file.knowledge_base.path.as_deref(), Some("~/kb/answers.json")); // Not yet expanded
        assert_eq!(file.matching.threshold, Some(0.75));
        assert_eq!(file.chat.bot_name, None);

        let config = merge_configs(file, None);
        assert_eq!(config.knowledge_base.path, PathBuf::from("~/kb/answers.json"));
        assert_eq!(config.chat.bot_name, "Bot"); // Default
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let file = parse("");
        assert_eq!(file, ConfigFile::default());

        let config = merge_configs(file, None);
        assert_eq!(config, Config::default());
        assert_eq!(config.knowledge_base.path, PathBuf::from("knowledge_base.json"));
        assert_eq!(config.matching.threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: std::result::Result<ConfigFile, _> = toml::from_str("[matching]\ncutoff = 0.5\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            knowledge_base: KnowledgeBaseConfig {
                path: PathBuf::from("~/kb_test.json"),
            },
            ..Default::default()
        };

        expand_config_paths(&mut config).unwrap();

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(config.knowledge_base.path, home_dir.join("kb_test.json"));
    }

    #[test]
    fn test_merge_prefers_project_values() {
        let user = parse("[matching]\nthreshold = 0.8\n[chat]\nbot_name = \"Rusty\"\n");
        let project = parse("[knowledge_base]\npath = \"project_kb.json\"\n");

        let merged = merge_configs(user, Some(project));

        assert_eq!(merged.knowledge_base.path, PathBuf::from("project_kb.json"));
        assert_eq!(merged.matching.threshold, 0.8); // Project left it unset
        assert_eq!(merged.chat.bot_name, "Rusty");
    }

    #[test]
    fn test_project_value_equal_to_default_still_wins() {
        let user = parse(
            "[knowledge_base]\npath = \"user.json\"\n[matching]\nthreshold = 0.8\n[chat]\nbot_name = \"Rusty\"\n",
        );
        let project = parse(
            "[knowledge_base]\npath = \"knowledge_base.json\"\n[matching]\nthreshold = 0.6\n[chat]\nbot_name = \"Bot\"\n",
        );

        let merged = merge_configs(user, Some(project));

        assert_eq!(merged.knowledge_base.path, PathBuf::from("knowledge_base.json"));
        assert_eq!(merged.matching.threshold, 0.6);
        assert_eq!(merged.chat.bot_name, "Bot");
    }

    #[test]
    fn test_overrides_win() {
        let mut config = Config::default();
        let overrides = ConfigOverrides {
            knowledge_base: Some(PathBuf::from("/tmp/other.json")),
            threshold: Some(0.9),
        };
        apply_overrides(&mut config, &overrides);
        assert_eq!(config.knowledge_base.path, PathBuf::from("/tmp/other.json"));
        assert_eq!(config.matching.threshold, 0.9);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_override_path_is_kept_exactly() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = PathBuf::from(OsStr::from_bytes(b"/tmp/kb-\xff.json"));
        let mut config = Config::default();
        let overrides = ConfigOverrides {
            knowledge_base: Some(raw.clone()),
            threshold: None,
        };

        apply_overrides(&mut config, &overrides);
        expand_config_paths(&mut config).unwrap();

        assert_eq!(config.knowledge_base.path, raw);
        assert_eq!(config.knowledge_base_path().as_os_str().as_bytes(), b"/tmp/kb-\xff.json");
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let mut config = Config::default();
        config.matching.threshold = 1.5;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("outside the range"));

        config.matching.threshold = -0.1;
        assert!(validate_config(&config).is_err());

        config.matching.threshold = 1.0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_values() {
        let mut config = Config::default();
        config.knowledge_base.path = PathBuf::from("  ");
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.chat.bot_name = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_directory_kb_path() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.knowledge_base.path = dir.path().to_path_buf();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("is a directory"));
    }

    #[test]
    fn test_find_project_config_in_ancestor() {
        let root = tempdir().unwrap();
        let nested = root.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(PROJECT_CONFIG_FILENAME),
            "[chat]\nbot_name = \"Helper\"\n",
        )
        .unwrap();

        let found = find_project_config_path(&nested).expect("config should be found");
        assert_eq!(found, root.path().join(PROJECT_CONFIG_FILENAME));

        let loaded = load_project_config(&nested).unwrap().unwrap();
        assert_eq!(loaded.chat.bot_name.as_deref(), Some("Helper"));
    }

    #[test]
    fn test_project_search_stops_at_git_root() {
        let root = tempdir().unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let repo = root.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        let nested = repo.join("src");
        fs::create_dir_all(&nested).unwrap();

        assert!(find_project_config_path(&nested).is_none());
    }

    #[test]
    fn test_invalid_toml_reports_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[matching\n").unwrap();
        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }
}
