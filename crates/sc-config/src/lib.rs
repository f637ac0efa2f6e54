//! Configuration management for sc.
//!
//! Parses `sc.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `transform.default_show_id`
//! - `transform.buzzsprout_url`
//! - `render.podcast_url`
//! - `render.youtube_embed_url`
//!
//! ## Example
//!
//! ```toml
//! [transform]
//! default_show_id = "${SPOTIFY_SHOW_ID:-}"
//! disabled_rules = ["youtube-url"]
//!
//! [render]
//! mode = "static"
//! wrapper_class = "prose prose-gray max-w-none"
//! ```

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override render mode.
    pub mode: Option<RenderMode>,
    /// Override default podcast show id.
    pub default_show_id: Option<String>,
    /// Override wrapper class.
    pub wrapper_class: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sc.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Transformation configuration.
    pub transform: TransformConfig,
    /// Rendering configuration.
    pub render: RenderConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Transformation configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Show id used for `[podcast_subscribe]` shortcodes without an `id`.
    pub default_show_id: Option<String>,
    /// Episode URL prefix for `[buzzsprout]` shortcodes (built-in default
    /// when unset).
    pub buzzsprout_url: Option<String>,
    /// Rewrite rules to skip, by name.
    pub disabled_rules: Vec<String>,
}

/// How content is rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Full widget markup.
    #[default]
    Interactive,
    /// Normalized HTML with inert placeholders.
    Static,
}

/// Rendering configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Render mode.
    pub mode: RenderMode,
    /// Class of the wrapping `<div>` (no wrapper when unset).
    pub wrapper_class: Option<String>,
    /// Prefix for subscribe button links (renderer default when unset).
    pub podcast_url: Option<String>,
    /// Prefix for YouTube embeds (renderer default when unset).
    pub youtube_embed_url: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`transform.default_show_id`").
        field: String,
        /// Error message (e.g., "${`SPOTIFY_SHOW_ID`} not set").
        message: String,
    },
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sc.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(mode) = settings.mode {
            self.render.mode = mode;
        }
        if let Some(show_id) = &settings.default_show_id {
            self.transform.default_show_id = Some(show_id.clone());
        }
        if let Some(class) = &settings.wrapper_class {
            self.render.wrapper_class = Some(class.clone());
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_transform()?;
        self.validate_render()?;
        Ok(())
    }

    /// Validate transform configuration.
    fn validate_transform(&self) -> Result<(), ConfigError> {
        for rule in &self.transform.disabled_rules {
            if !sc_content::RULE_NAMES.contains(&rule.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "transform.disabled_rules: unknown rule \"{rule}\" (known: {})",
                    sc_content::RULE_NAMES.join(", ")
                )));
            }
        }
        if let Some(url) = &self.transform.buzzsprout_url {
            require_http_url(url, "transform.buzzsprout_url")?;
        }
        Ok(())
    }

    /// Validate render configuration.
    fn validate_render(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.render.podcast_url {
            require_http_url(url, "render.podcast_url")?;
        }
        if let Some(url) = &self.render.youtube_embed_url {
            require_http_url(url, "render.youtube_embed_url")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_opt(
            &mut self.transform.default_show_id,
            "transform.default_show_id",
        )?;
        expand::expand_opt(
            &mut self.transform.buzzsprout_url,
            "transform.buzzsprout_url",
        )?;
        expand::expand_opt(&mut self.render.podcast_url, "render.podcast_url")?;
        expand::expand_opt(
            &mut self.render.youtube_embed_url,
            "render.youtube_embed_url",
        )?;
        Ok(())
    }
}

/// Search for the config file in `start` and its parents.
fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
