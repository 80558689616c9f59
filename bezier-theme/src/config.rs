//! # Theme Configuration System
//!
//! Selects the ambient [ColorTheme], the default [ComponentTheme] and the
//! color token file, from environment variables, configuration files, or
//! programmatically.
//!
//! ## Environment Variables
//!
//! - `BEZIER_THEME`: ambient color theme (`light` or `dark`)
//! - `BEZIER_COMPONENT_THEME`: default component theme (`normal` or `inverted`)
//! - `BEZIER_TOKENS`: path to a color token file
//! - `BEZIER_THEME_CONFIG`: path to a configuration file; when it loads, it
//!   replaces the values above
//!
//! ## Configuration File Format
//!
//! ```toml
//! [theme]
//! color = "dark"
//! component = "normal"
//! tokens = "./tokens.toml"
//! ```
//!
//! JSON files use the same shape. Relative token paths are resolved against
//! the directory of the configuration file.
//!
//! ## Programmatic Configuration
//!
//! ```rust
//! use bezier_theme::config::ThemeConfig;
//! use bezier_theme::theme::ColorTheme;
//!
//! let config = ThemeConfig::new().with_color_theme(ColorTheme::Dark);
//! let tokens = config.load_tokens().unwrap();
//! assert!(tokens.is_empty());
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ThemeError, ThemeResult};
use crate::theme::{ColorTheme, ComponentTheme};
use crate::tokens::{ColorTokenSet, FileFormat};

/// Environment variable selecting the ambient color theme.
pub const THEME_ENV: &str = "BEZIER_THEME";
/// Environment variable selecting the default component theme.
pub const COMPONENT_THEME_ENV: &str = "BEZIER_COMPONENT_THEME";
/// Environment variable pointing at a color token file.
pub const TOKENS_ENV: &str = "BEZIER_TOKENS";
/// Environment variable pointing at a configuration file.
pub const CONFIG_ENV: &str = "BEZIER_THEME_CONFIG";

/// Theme settings for a bezier application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    /// The ambient color theme.
    pub color_theme: ColorTheme,
    /// The component theme used when a component does not set its own.
    pub component_theme: ComponentTheme,
    /// Color token file, if any.
    pub tokens_path: Option<PathBuf>,
    /// Directory relative token paths are resolved against.
    base_dir: Option<PathBuf>,
}

/// On-disk layout of a configuration file.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    theme: ThemeSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeSection {
    color: ColorTheme,
    component: ComponentTheme,
    tokens: Option<PathBuf>,
}

impl From<ConfigFile> for ThemeConfig {
    fn from(file: ConfigFile) -> Self {
        Self {
            color_theme: file.theme.color,
            component_theme: file.theme.component,
            tokens_path: file.theme.tokens,
            base_dir: None,
        }
    }
}

impl ThemeConfig {
    /// Light theme, normal components, no token file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration from environment variables or use defaults.
    pub fn from_env_or_default() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [ThemeConfig::from_env_or_default], reading variables through
    /// `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(value) = lookup(THEME_ENV) {
            match value.parse() {
                Ok(theme) => config.color_theme = theme,
                Err(e) => log::warn!("Ignoring {}: {}", THEME_ENV, e),
            }
        }

        if let Some(value) = lookup(COMPONENT_THEME_ENV) {
            match value.parse() {
                Ok(theme) => config.component_theme = theme,
                Err(e) => log::warn!("Ignoring {}: {}", COMPONENT_THEME_ENV, e),
            }
        }

        if let Some(path) = lookup(TOKENS_ENV) {
            config.tokens_path = Some(PathBuf::from(path));
        }

        if let Some(path) = lookup(CONFIG_ENV) {
            match Self::from_file(&path) {
                Ok(file_config) => config = file_config,
                Err(e) => log::warn!("Ignoring {}: {}", CONFIG_ENV, e),
            }
        }

        config
    }

    /// Load a configuration from a `.toml` or `.json` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::FileNotFound(path.to_path_buf()));
        }

        let format = FileFormat::of(path)?;
        let content =
            fs::read_to_string(path).map_err(|e| ThemeError::Read(path.to_path_buf(), e))?;

        let file: ConfigFile = match format {
            FileFormat::Toml => toml::from_str(&content).map_err(|e| ThemeError::parse(path, e))?,
            FileFormat::Json => {
                serde_json::from_str(&content).map_err(|e| ThemeError::parse(path, e))?
            }
        };

        let mut config = Self::from(file);
        config.base_dir = path.parent().map(Path::to_path_buf);
        log::debug!(
            "Loaded theme config from {}: {} / {}",
            path.display(),
            config.color_theme,
            config.component_theme
        );
        Ok(config)
    }

    /// Load a configuration from TOML content.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ThemeError::parse("<inline>", e))?;
        Ok(file.into())
    }

    /// Load a configuration from JSON content.
    pub fn from_json(content: &str) -> ThemeResult<Self> {
        let file: ConfigFile =
            serde_json::from_str(content).map_err(|e| ThemeError::parse("<inline>", e))?;
        Ok(file.into())
    }

    /// Set the ambient color theme.
    pub fn with_color_theme(mut self, theme: ColorTheme) -> Self {
        self.color_theme = theme;
        self
    }

    /// Set the default component theme.
    pub fn with_component_theme(mut self, theme: ComponentTheme) -> Self {
        self.component_theme = theme;
        self
    }

    /// Set the color token file.
    pub fn with_tokens_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tokens_path = Some(path.into());
        self
    }

    /// The token file path after resolving it against the config file's
    /// directory.
    pub fn resolved_tokens_path(&self) -> Option<PathBuf> {
        let path = self.tokens_path.as_ref()?;
        match &self.base_dir {
            Some(base) if path.is_relative() => Some(base.join(path)),
            _ => Some(path.clone()),
        }
    }

    /// Load the configured color tokens; empty when no token file is set.
    pub fn load_tokens(&self) -> ThemeResult<ColorTokenSet> {
        match self.resolved_tokens_path() {
            Some(path) => ColorTokenSet::from_file(path),
            None => Ok(ColorTokenSet::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::new();
        assert_eq!(config.color_theme, ColorTheme::Light);
        assert_eq!(config.component_theme, ComponentTheme::Normal);
        assert!(config.tokens_path.is_none());
    }

    #[test]
    fn test_from_toml() {
        let config = ThemeConfig::from_toml(
            r#"
[theme]
color = "dark"
component = "inverted"
tokens = "tokens.toml"
"#,
        )
        .unwrap();
        assert_eq!(config.color_theme, ColorTheme::Dark);
        assert_eq!(config.component_theme, ComponentTheme::Inverted);
        assert_eq!(config.resolved_tokens_path(), Some(PathBuf::from("tokens.toml")));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ThemeConfig::from_toml("[theme]\ncolor = \"dark\"\n").unwrap();
        assert_eq!(config.color_theme, ColorTheme::Dark);
        assert_eq!(config.component_theme, ComponentTheme::Normal);

        let empty = ThemeConfig::from_toml("").unwrap();
        assert_eq!(empty, ThemeConfig::new());
    }

    #[test]
    fn test_from_json() {
        let config =
            ThemeConfig::from_json(r#"{"theme": {"color": "dark", "component": "normal"}}"#)
                .unwrap();
        assert_eq!(config.color_theme, ColorTheme::Dark);
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let result = ThemeConfig::from_toml("[theme]\ncolor = \"sepia\"\n");
        assert!(matches!(result, Err(ThemeError::Parse(_, _))));
    }

    #[test]
    fn test_from_lookup() {
        let config = ThemeConfig::from_lookup(lookup(&[
            (THEME_ENV, "dark"),
            (COMPONENT_THEME_ENV, "inverted"),
            (TOKENS_ENV, "/etc/bezier/tokens.json"),
        ]));
        assert_eq!(config.color_theme, ColorTheme::Dark);
        assert_eq!(config.component_theme, ComponentTheme::Inverted);
        assert_eq!(
            config.resolved_tokens_path(),
            Some(PathBuf::from("/etc/bezier/tokens.json"))
        );
    }

    #[test]
    fn test_from_lookup_ignores_bad_values() {
        let config = ThemeConfig::from_lookup(lookup(&[
            (THEME_ENV, "sepia"),
            (CONFIG_ENV, "/definitely/not/here.toml"),
        ]));
        assert_eq!(config, ThemeConfig::new());
    }

    #[test]
    fn test_builder() {
        let config = ThemeConfig::new()
            .with_color_theme(ColorTheme::Dark)
            .with_component_theme(ComponentTheme::Inverted)
            .with_tokens_path("tokens.toml");
        assert_eq!(config.color_theme, ColorTheme::Dark);
        assert_eq!(config.component_theme, ComponentTheme::Inverted);
        assert_eq!(config.tokens_path, Some(PathBuf::from("tokens.toml")));
    }

    #[test]
    fn test_unsupported_extension() {
        let path = env::temp_dir().join("bezier_config_unsupported.yaml");
        fs::write(&path, "theme: {}").unwrap();
        assert!(matches!(
            ThemeConfig::from_file(&path),
            Err(ThemeError::UnsupportedFormat(_))
        ));
        fs::remove_file(&path).unwrap();
    }
}
