use std::fs;
use std::path::PathBuf;

use bezier_theme::color::ColorComponents;
use bezier_theme::config::{ThemeConfig, CONFIG_ENV, THEME_ENV};
use bezier_theme::error::ThemeError;
use bezier_theme::rendering::{button_visual, InteractionState};
use bezier_theme::theme::{ColorTheme, ComponentTheme};
use bezier_theme::tokens::ColorTokenSet;

const TOKENS_TOML: &str = r##"
[primary-bg-normal]
light = "#3b82f6"
dark = "#60a5fa"

[bg-transparent]
light = "#80808000"
dark = "#80808000"
"##;

const TOKENS_JSON: &str = r##"{
    "success-bg-normal": {"light": "#22c55e", "dark": "#4ade80"},
    "critical-bg-normal": {"light": "#ef4444", "dark": "#f87171"}
}"##;

/// A scratch directory unique to one test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("bezier_theme_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_tokens_from_toml_file() {
    let dir = scratch_dir("toml_tokens");
    let path = dir.join("tokens.toml");
    fs::write(&path, TOKENS_TOML).unwrap();

    let tokens = ColorTokenSet::from_file(&path).unwrap();
    assert_eq!(tokens.len(), 2);

    let transparent = tokens.pressed("bg-transparent").unwrap();
    assert_eq!(
        transparent.light,
        ColorComponents::new(128.0, 128.0, 128.0, 0.05)
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_tokens_from_json_file_keep_order() {
    let dir = scratch_dir("json_tokens");
    let path = dir.join("tokens.json");
    fs::write(&path, TOKENS_JSON).unwrap();

    let tokens = ColorTokenSet::from_file(&path).unwrap();
    let names: Vec<_> = tokens.names().collect();
    assert_eq!(names, ["success-bg-normal", "critical-bg-normal"]);

    let success = tokens.require("success-bg-normal").unwrap();
    assert_eq!(success.light, ColorComponents::rgb(34.0, 197.0, 94.0));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_token_file() {
    let path = std::env::temp_dir().join("bezier_theme_no_such_tokens.toml");
    assert!(matches!(
        ColorTokenSet::from_file(&path),
        Err(ThemeError::FileNotFound(p)) if p == path
    ));
}

#[test]
fn test_malformed_token_file() {
    let dir = scratch_dir("malformed_tokens");
    let path = dir.join("tokens.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        ColorTokenSet::from_file(&path),
        Err(ThemeError::Parse(p, _)) if p == path
    ));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_config_resolves_relative_tokens_path() {
    let dir = scratch_dir("config_relative");
    fs::write(dir.join("tokens.toml"), TOKENS_TOML).unwrap();
    let config_path = dir.join("bezier.toml");
    fs::write(
        &config_path,
        "[theme]\ncolor = \"dark\"\ncomponent = \"inverted\"\ntokens = \"tokens.toml\"\n",
    )
    .unwrap();

    let config = ThemeConfig::from_file(&config_path).unwrap();
    assert_eq!(config.color_theme, ColorTheme::Dark);
    assert_eq!(config.resolved_tokens_path(), Some(dir.join("tokens.toml")));

    let tokens = config.load_tokens().unwrap();
    let primary = tokens.require("primary-bg-normal").unwrap();
    // Inverted inside a dark app shows the light half.
    assert_eq!(
        primary.resolve(config.color_theme, config.component_theme),
        primary.light
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_config_file_from_lookup() {
    let dir = scratch_dir("config_lookup");
    let config_path = dir.join("bezier.json");
    fs::write(&config_path, r#"{"theme": {"color": "dark"}}"#).unwrap();
    let config_value = config_path.to_string_lossy().into_owned();

    // The config file replaces values from individual variables.
    let config = ThemeConfig::from_lookup(|key| match key {
        k if k == THEME_ENV => Some("light".to_string()),
        k if k == CONFIG_ENV => Some(config_value.clone()),
        _ => None,
    });
    assert_eq!(config.color_theme, ColorTheme::Dark);
    assert_eq!(config.component_theme, ComponentTheme::Normal);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_pressed_button_from_tokens() {
    let tokens = ColorTokenSet::from_toml(TOKENS_TOML).unwrap();
    let primary = tokens.require("primary-bg-normal").unwrap();

    for theme in [ColorTheme::Light, ColorTheme::Dark] {
        let idle = button_visual(primary, theme, ComponentTheme::Normal, InteractionState::Idle);
        let pressed = button_visual(
            primary,
            theme,
            ComponentTheme::Normal,
            InteractionState::from_flags(true, true),
        );
        assert_eq!(idle.background, primary.color(theme));
        assert_eq!(pressed.background, tokens.pressed("primary-bg-normal").unwrap().color(theme));
        assert_ne!(pressed.background, idle.background);
    }
}
