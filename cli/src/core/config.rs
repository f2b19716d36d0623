//! # FaqRS Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for FaqRS: loading,
//! merging, validating and accessing the settings that control matching,
//! the knowledge base to load, and the chat front end.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line overrides (`--kb` / `FAQRS_KB`, `--threshold`)
//! 2. Project-specific `.faqrs.toml` in current directory or ancestors
//! 3. User-specific `<config dir>/faqrs/config.toml`
//! 4. Default values defined in the code
//!
//! Each file is read as a `ConfigFile` layer in which unset keys stay `None`.
//! Layers are merged key by key (a key set in a higher layer wins, whatever
//! its value) and the remaining gaps are filled with the defaults.
//!
//! Paths are expanded (`~` to the home directory) and relative knowledge-base
//! paths are resolved against the directory of the file that declared them.
//! The merged configuration is validated before use.
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [matching]
//! threshold = 0.25
//! fallback_message = "Sorry, I don't know that one yet."
//!
//! [knowledge_base]
//! path = "faq.toml"
//!
//! [chat]
//! bot_name = "Shop Bot"
//! ```
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = config::load_config(&Overrides::default())?;
//! let resolver_config = cfg.matching.resolver_config();
//! ```
//!
use crate::core::error::{FaqrsError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use faqrs_engine::{ResolverConfig, WeightingParams, DEFAULT_FALLBACK_MESSAGE, DEFAULT_THRESHOLD};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The effective configuration after all sources have been merged.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub matching: MatchingConfig,
    pub knowledge_base: KnowledgeBaseConfig,
    pub chat: ChatConfig,
}

/// Similarity threshold, fallback text and IDF smoothing constants.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingConfig {
    /// Minimum cosine similarity for an answer to be returned.
    pub threshold: f64,
    /// Text returned when nothing in the knowledge base is close enough.
    pub fallback_message: String,
    /// Added to the document count and document frequency inside the IDF logarithm.
    pub idf_smoothing: f64,
    /// Added to every IDF value.
    pub idf_offset: f64,
}

/// Where to load the knowledge base from.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeBaseConfig {
    /// Path to a TOML knowledge-base file. The built-in sample FAQ is used when unset.
    pub path: Option<String>,
}

/// Settings for `faqrs chat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Name printed in front of every answer.
    pub bot_name: String,
    /// First message printed when the chat starts.
    pub greeting: String,
}

/// One configuration file as written on disk.
///
/// Keys left out of the file stay `None`, so a lower layer only fills in
/// what a higher layer did not set.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub matching: MatchingSection,
    #[serde(default)]
    pub knowledge_base: KnowledgeBaseConfig,
    #[serde(default)]
    pub chat: ChatSection,
}

/// `[matching]` as written in a configuration file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MatchingSection {
    pub threshold: Option<f64>,
    pub fallback_message: Option<String>,
    pub idf_smoothing: Option<f64>,
    pub idf_offset: Option<f64>,
}

/// `[chat]` as written in a configuration file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChatSection {
    pub bot_name: Option<String>,
    pub greeting: Option<String>,
}

impl ConfigFile {
    /// Keeps every value set in `self` and takes the rest from `lower`.
    pub fn or(self, lower: ConfigFile) -> ConfigFile {
        ConfigFile {
            matching: MatchingSection {
                threshold: self.matching.threshold.or(lower.matching.threshold),
                fallback_message: self
                    .matching
                    .fallback_message
                    .or(lower.matching.fallback_message),
                idf_smoothing: self.matching.idf_smoothing.or(lower.matching.idf_smoothing),
                idf_offset: self.matching.idf_offset.or(lower.matching.idf_offset),
            },
            knowledge_base: KnowledgeBaseConfig {
                path: self.knowledge_base.path.or(lower.knowledge_base.path),
            },
            chat: ChatSection {
                bot_name: self.chat.bot_name.or(lower.chat.bot_name),
                greeting: self.chat.greeting.or(lower.chat.greeting),
            },
        }
    }

    /// Fills every unset value with its built-in default.
    pub fn into_config(self) -> Config {
        Config {
            matching: MatchingConfig {
                threshold: self.matching.threshold.unwrap_or_else(default_threshold),
                fallback_message: self
                    .matching
                    .fallback_message
                    .unwrap_or_else(default_fallback_message),
                idf_smoothing: self
                    .matching
                    .idf_smoothing
                    .unwrap_or_else(default_idf_smoothing),
                idf_offset: self.matching.idf_offset.unwrap_or_else(default_idf_offset),
            },
            knowledge_base: self.knowledge_base,
            chat: ChatConfig {
                bot_name: self.chat.bot_name.unwrap_or_else(default_bot_name),
                greeting: self.chat.greeting.unwrap_or_else(default_greeting),
            },
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            fallback_message: default_fallback_message(),
            idf_smoothing: default_idf_smoothing(),
            idf_offset: default_idf_offset(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            greeting: default_greeting(),
        }
    }
}

impl MatchingConfig {
    /// Decision parameters for the engine's resolver.
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            threshold: self.threshold,
            fallback_message: self.fallback_message.clone(),
        }
    }

    /// IDF constants for the engine's indexer.
    pub fn weighting_params(&self) -> WeightingParams {
        WeightingParams {
            idf_smoothing: self.idf_smoothing,
            idf_offset: self.idf_offset,
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}
fn default_fallback_message() -> String {
    DEFAULT_FALLBACK_MESSAGE.to_string()
}
fn default_idf_smoothing() -> f64 {
    WeightingParams::default().idf_smoothing
}
fn default_idf_offset() -> f64 {
    WeightingParams::default().idf_offset
}
fn default_bot_name() -> String {
    "FAQ Bot".to_string()
}
fn default_greeting() -> String {
    "Hello! I’m your FAQ assistant. Ask me anything about our store.".to_string()
}

/// Values given on the command line. They win over every file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    /// Knowledge-base file (`--kb` or `FAQRS_KB`).
    pub knowledge_base: Option<PathBuf>,
    /// Similarity threshold (`--threshold`).
    pub threshold: Option<f64>,
}

const PROJECT_CONFIG_FILENAME: &str = ".faqrs.toml";

/// Loads, merges and validates the configuration for this invocation.
pub fn load_config(overrides: &Overrides) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config, project_config);
    apply_overrides(&mut merged_config, overrides);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "FaqRS", "faqrs") {
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

fn load_project_config() -> Result<Option<ConfigFile>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found in current directory or ancestors.",
            PROJECT_CONFIG_FILENAME
        );
        Ok(None)
    }
}

/// Walks up from `start` looking for `.faqrs.toml`, stopping at the first `.git` directory.
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

/// Reads one TOML config file and resolves its paths relative to the file's directory.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    resolve_config_paths(&mut config, base_dir);
    Ok(config)
}

/// Expands `~` and anchors relative knowledge-base paths at `base_dir`.
fn resolve_config_paths(config: &mut ConfigFile, base_dir: &Path) {
    if let Some(kb_path) = config.knowledge_base.path.as_mut() {
        let expanded = PathBuf::from(shellexpand::tilde(kb_path.as_str()).into_owned());
        let resolved = if expanded.is_relative() {
            base_dir.join(expanded)
        } else {
            expanded
        };
        *kb_path = resolved.to_string_lossy().into_owned();
        debug!("Resolved knowledge base path: {}", kb_path);
    }
}

/// Layers the project file over the user file, then fills in the defaults.
///
/// A key set in the project file always wins, even when it repeats the
/// built-in default.
fn merge_configs(user: Option<ConfigFile>, project: Option<ConfigFile>) -> Config {
    let user = user.unwrap_or_default();
    match project {
        Some(project) => project.or(user),
        None => user,
    }
    .into_config()
}

fn apply_overrides(config: &mut Config, overrides: &Overrides) {
    if let Some(kb) = &overrides.knowledge_base {
        debug!("Knowledge base overridden on the command line: {}", kb.display());
        config.knowledge_base.path = Some(kb.to_string_lossy().into_owned());
    }
    if let Some(threshold) = overrides.threshold {
        debug!("Threshold overridden on the command line: {}", threshold);
        config.matching.threshold = threshold;
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    let matching = &config.matching;
    if !matching.threshold.is_finite() || !(0.0..=1.0).contains(&matching.threshold) {
        return Err(anyhow!(FaqrsError::Config(format!(
            "Invalid threshold: {}. Expected a value between 0 and 1.",
            matching.threshold
        ))));
    }
    if !matching.idf_smoothing.is_finite() || matching.idf_smoothing <= 0.0 {
        return Err(anyhow!(FaqrsError::Config(format!(
            "Invalid idf_smoothing: {}. Expected a positive number.",
            matching.idf_smoothing
        ))));
    }
    if !matching.idf_offset.is_finite() || matching.idf_offset < 0.0 {
        return Err(anyhow!(FaqrsError::Config(format!(
            "Invalid idf_offset: {}. Expected a non-negative number.",
            matching.idf_offset
        ))));
    }
    if matching.fallback_message.trim().is_empty() {
        return Err(anyhow!(FaqrsError::Config(
            "fallback_message cannot be empty.".to_string()
        )));
    }
    if config.chat.bot_name.trim().is_empty() {
        return Err(anyhow!(FaqrsError::Config(
            "chat.bot_name cannot be empty.".to_string()
        )));
    }
    if let Some(path) = &config.knowledge_base.path {
        if path.trim().is_empty() {
            return Err(anyhow!(FaqrsError::Config(
                "knowledge_base.path cannot be empty.".to_string()
            )));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [matching]
            threshold = 0.35
            fallback_message = "No idea, sorry."

            [knowledge_base]
            path = "~/faq.toml"

            [chat]
            bot_name = "Shop Bot"
        "#;

        let file: ConfigFile = toml::from_str(toml_content).expect("Failed to parse TOML");
        assert_eq!(file.matching.idf_smoothing, None); // Not set in the file

        let config = file.into_config();
        assert_eq!(config.matching.threshold, 0.35);
        assert_eq!(config.matching.fallback_message, "No idea, sorry.");
        assert_eq!(config.matching.idf_smoothing, 1.0); // Default
        assert_eq!(config.matching.idf_offset, 1.0); // Default
        assert_eq!(config.knowledge_base.path.as_deref(), Some("~/faq.toml")); // Not yet expanded
        assert_eq!(config.chat.bot_name, "Shop Bot");
        assert_eq!(config.chat.greeting, default_greeting());
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        let file: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(file, ConfigFile::default());
        let config = file.into_config();
        assert_eq!(config, Config::default());
        assert_eq!(config.matching.resolver_config(), ResolverConfig::default());
        assert_eq!(config.matching.weighting_params(), WeightingParams::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<ConfigFile, _> =
            toml::from_str("[matching]\ntreshold = 0.3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_path_resolution() {
        let mut config = ConfigFile {
            knowledge_base: KnowledgeBaseConfig {
                path: Some("~/faq.toml".to_string()),
            },
            ..Default::default()
        };
        resolve_config_paths(&mut config, Path::new("/etc/faqrs"));
        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.knowledge_base.path,
            Some(home_dir.join("faq.toml").to_string_lossy().into_owned())
        );

        let mut relative = ConfigFile {
            knowledge_base: KnowledgeBaseConfig {
                path: Some("data/faq.toml".to_string()),
            },
            ..Default::default()
        };
        resolve_config_paths(&mut relative, Path::new("/etc/faqrs"));
        assert_eq!(
            relative.knowledge_base.path,
            Some(
                Path::new("/etc/faqrs")
                    .join("data/faq.toml")
                    .to_string_lossy()
                    .into_owned()
            )
        );
    }

    #[test]
    fn test_load_config_from_path_resolves_relative_kb() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join(PROJECT_CONFIG_FILENAME);
        fs::write(&config_path, "[knowledge_base]\npath = \"faq.toml\"\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.knowledge_base.path,
            Some(temp_dir.path().join("faq.toml").to_string_lossy().into_owned())
        );
    }

    #[test]
    fn test_load_config_from_path_reports_bad_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join(PROJECT_CONFIG_FILENAME);
        fs::write(&config_path, "[matching\nthreshold = ").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_find_project_config_in_ancestor() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        assert_eq!(
            find_project_config_path(&nested),
            Some(temp_dir.path().join(PROJECT_CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_find_project_config_stops_at_git_root() {
        let temp_dir = tempdir().unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        assert_eq!(find_project_config_path(&repo), None);
    }

    fn layer(toml_content: &str) -> ConfigFile {
        toml::from_str(toml_content).expect("Failed to parse TOML")
    }

    #[test]
    fn test_merge_prefers_project_values() {
        let user = layer(
            r#"
            [matching]
            threshold = 0.3
            fallback_message = "user fallback"

            [knowledge_base]
            path = "/user/faq.toml"

            [chat]
            bot_name = "User Bot"
        "#,
        );
        let project = layer("[matching]\nthreshold = 0.5\n");

        let merged = merge_configs(Some(user), Some(project));
        assert_eq!(merged.matching.threshold, 0.5); // project
        assert_eq!(merged.matching.fallback_message, "user fallback"); // user, project left it unset
        assert_eq!(merged.knowledge_base.path.as_deref(), Some("/user/faq.toml"));
        assert_eq!(merged.chat.bot_name, "User Bot");
        assert_eq!(merged.chat.greeting, default_greeting()); // default, set nowhere
    }

    #[test]
    fn test_merge_project_can_restore_default_value() {
        let user = layer("[matching]\nthreshold = 0.5\nidf_offset = 0.0\n");
        let project = layer("[matching]\nthreshold = 0.2\nidf_offset = 1.0\n");

        let merged = merge_configs(Some(user), Some(project));
        assert_eq!(merged.matching.threshold, 0.2);
        assert_eq!(merged.matching.idf_offset, 1.0);
    }

    #[test]
    fn test_merge_without_files_gives_defaults() {
        assert_eq!(merge_configs(None, None), Config::default());
        let user_only = merge_configs(Some(layer("[chat]\nbot_name = \"Solo\"\n")), None);
        assert_eq!(user_only.chat.bot_name, "Solo");
    }

    #[test]
    fn test_weighting_params_from_file() {
        let config = layer("[matching]\nidf_smoothing = 0.5\nidf_offset = 0.0\n").into_config();
        assert_eq!(
            config.matching.weighting_params(),
            WeightingParams {
                idf_smoothing: 0.5,
                idf_offset: 0.0,
            }
        );
    }

    #[test]
    fn test_overrides_win() {
        let mut config = Config {
            matching: MatchingConfig {
                threshold: 0.5,
                ..Default::default()
            },
            ..Default::default()
        };
        apply_overrides(
            &mut config,
            &Overrides {
                knowledge_base: Some(PathBuf::from("/tmp/kb.toml")),
                threshold: Some(0.1),
            },
        );
        assert_eq!(config.matching.threshold, 0.1);
        assert_eq!(config.knowledge_base.path.as_deref(), Some("/tmp/kb.toml"));
    }

    #[test]
    fn test_validate_config_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_invalid_threshold() {
        for threshold in [-0.1, 1.5, f64::NAN] {
            let config = Config {
                matching: MatchingConfig {
                    threshold,
                    ..Default::default()
                },
                ..Default::default()
            };
            let result = validate_config(&config);
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("Invalid threshold"));
        }
    }

    #[test]
    fn test_validate_config_invalid_smoothing() {
        let config = Config {
            matching: MatchingConfig {
                idf_smoothing: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid idf_smoothing"));
    }

    #[test]
    fn test_validate_config_invalid_offset() {
        for idf_offset in [-0.5, f64::INFINITY] {
            let config = Config {
                matching: MatchingConfig {
                    idf_offset,
                    ..Default::default()
                },
                ..Default::default()
            };
            let result = validate_config(&config);
            assert!(result.unwrap_err().to_string().contains("Invalid idf_offset"));
        }

        let zero = Config {
            matching: MatchingConfig {
                idf_offset: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&zero).is_ok());
    }

    #[test]
    fn test_validate_config_empty_fallback() {
        let config = Config {
            matching: MatchingConfig {
                fallback_message: "   ".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
