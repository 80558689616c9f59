//! # Color Token Sets
//!
//! Named [SemanticColor]s, loaded from TOML or JSON and kept in declaration
//! order.
//!
//! ## File Format
//!
//! ```toml
//! [primary-bg-normal]
//! light = "#3b82f6"
//! dark = "#60a5fa"
//!
//! [critical-bg-transparent]
//! light = "#ef444400"
//! dark = "#f8717100"
//! ```
//!
//! The JSON form is the same object: `{"primary-bg-normal": {"light": "..", "dark": ".."}}`.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{ThemeError, ThemeResult};
use crate::semantic::SemanticColor;

/// An ordered collection of named semantic colors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTokenSet {
    tokens: IndexMap<String, SemanticColor>,
}

impl ColorTokenSet {
    /// Create an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a token set from a `.toml` or `.json` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::FileNotFound(path.to_path_buf()));
        }

        let format = FileFormat::of(path)?;
        let content =
            fs::read_to_string(path).map_err(|e| ThemeError::Read(path.to_path_buf(), e))?;

        let tokens = match format {
            FileFormat::Toml => toml::from_str(&content).map_err(|e| ThemeError::parse(path, e))?,
            FileFormat::Json => {
                serde_json::from_str(&content).map_err(|e| ThemeError::parse(path, e))?
            }
        };
        let set = Self { tokens };

        log::debug!("Loaded {} color tokens from {}", set.len(), path.display());
        Ok(set)
    }

    /// Parse a token set from TOML content.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        let tokens = toml::from_str(content).map_err(|e| ThemeError::parse("<inline>", e))?;
        Ok(Self { tokens })
    }

    /// Parse a token set from JSON content.
    pub fn from_json(content: &str) -> ThemeResult<Self> {
        let tokens = serde_json::from_str(content).map_err(|e| ThemeError::parse("<inline>", e))?;
        Ok(Self { tokens })
    }

    /// Insert or replace a token. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, color: SemanticColor) -> Option<SemanticColor> {
        self.tokens.insert(name.into(), color)
    }

    /// Look up a token by name.
    pub fn get(&self, name: &str) -> Option<&SemanticColor> {
        self.tokens.get(name)
    }

    /// Look up a token by name, failing with [ThemeError::UnknownToken].
    pub fn require(&self, name: &str) -> ThemeResult<&SemanticColor> {
        self.get(name)
            .ok_or_else(|| ThemeError::UnknownToken(name.to_string()))
    }

    /// The pressed-state variant of a named token.
    pub fn pressed(&self, name: &str) -> ThemeResult<SemanticColor> {
        self.require(name).map(SemanticColor::pressed)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the set holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    /// Tokens in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SemanticColor)> {
        self.tokens.iter().map(|(name, color)| (name.as_str(), color))
    }
}

/// Supported on-disk formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    pub(crate) fn of(path: &Path) -> ThemeResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(FileFormat::Toml),
            Some("json") => Ok(FileFormat::Json),
            _ => Err(ThemeError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorComponents;

    const TOKENS: &str = r##"
[primary-bg-normal]
light = "#3b82f6"
dark = "#60a5fa"

[critical-bg-transparent]
light = "#ef444400"
dark = "#f8717100"

[accent-fg-normal]
light = "#6366f1"
dark = "#818cf8"
"##;

    #[test]
    fn test_toml_keeps_declaration_order() {
        let set = ColorTokenSet::from_toml(TOKENS).unwrap();
        let names: Vec<_> = set.names().collect();
        assert_eq!(
            names,
            ["primary-bg-normal", "critical-bg-transparent", "accent-fg-normal"]
        );
    }

    #[test]
    fn test_lookup_and_pressed() {
        let set = ColorTokenSet::from_toml(TOKENS).unwrap();
        let primary = set.require("primary-bg-normal").unwrap();
        assert_eq!(primary.light, ColorComponents::rgb(59.0, 130.0, 246.0));

        let pressed = set.pressed("critical-bg-transparent").unwrap();
        assert_eq!(pressed.light.alpha(), 0.10);
        assert_eq!(pressed.dark.alpha(), 0.10);
    }

    #[test]
    fn test_unknown_token() {
        let set = ColorTokenSet::new();
        assert!(set.is_empty());
        assert!(matches!(
            set.pressed("missing"),
            Err(ThemeError::UnknownToken(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_invalid_color_is_parse_error() {
        let result = ColorTokenSet::from_toml("[bad]\nlight = \"#12\"\ndark = \"#000000\"\n");
        assert!(matches!(result, Err(ThemeError::Parse(_, _))));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut set = ColorTokenSet::from_toml(TOKENS).unwrap();
        let white = SemanticColor::uniform(ColorComponents::WHITE);
        assert!(set.insert("primary-bg-normal", white).is_some());
        assert_eq!(set.names().next(), Some("primary-bg-normal"));
        assert_eq!(set.get("primary-bg-normal"), Some(&white));
        assert_eq!(set.len(), 3);
    }
}
