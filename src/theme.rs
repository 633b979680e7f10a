//! Card colour themes
//!
//! A [`Theme`] carries the colours a card is painted with. Themes can be
//! picked from a built-in table or loaded from TOML files; any colour a file
//! leaves out falls back to its base theme (the `default` theme unless the
//! file names another one).

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading themes or parsing colours
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse theme TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),
    #[error("Gradient angle must be a number, got '{0}'")]
    InvalidGradientAngle(String),
    #[error("Gradient stop must be a colour string, got '{0}'")]
    InvalidGradientStop(String),
}

/// Card background fill
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    /// A single CSS colour
    Solid(String),
    /// A linear gradient rotated by `angle` degrees through hex `stops`
    Gradient { angle: f64, stops: Vec<String> },
}

impl Background {
    /// Parse the compact `angle,stop,stop...` form used on the command line.
    ///
    /// A value without commas is a solid colour.
    pub fn parse(value: &str) -> Result<Self, ThemeError> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() < 2 {
            return Ok(Background::Solid(normalize_color(value.trim())));
        }

        let angle = parse_angle(parts[0])?;
        Ok(Background::Gradient {
            angle,
            stops: parts[1..].iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Gradient stops paired with their offset percentage.
    ///
    /// Stops are spread evenly over `[0, 100]`. A lone stop sits at `0`.
    /// Solid backgrounds have no stops.
    pub fn gradient_stops(&self) -> Vec<(f64, &str)> {
        match self {
            Background::Solid(_) => vec![],
            Background::Gradient { stops, .. } => {
                let last = stops.len().saturating_sub(1);
                stops
                    .iter()
                    .enumerate()
                    .map(|(index, stop)| {
                        let offset = if last == 0 {
                            0.0
                        } else {
                            (index as f64 * 100.0) / last as f64
                        };
                        (offset, stop.trim_start_matches('#'))
                    })
                    .collect()
            }
        }
    }
}

/// A complete set of card colours
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Optional name for the theme
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    pub title_color: String,
    pub text_color: String,
    pub icon_color: String,
    pub border_color: String,
    /// Progress ring colour
    pub ring_color: String,
    pub bg_color: Background,
}

/// TOML structure for deserializing theme files
#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: TomlColors,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
    /// Built-in theme supplying colours this file leaves out
    base: Option<String>,
}

#[derive(Deserialize, Default)]
struct TomlColors {
    title_color: Option<String>,
    text_color: Option<String>,
    icon_color: Option<String>,
    border_color: Option<String>,
    ring_color: Option<String>,
    bg_color: Option<TomlBackground>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TomlBackground {
    Solid(String),
    Gradient(Vec<TomlGradientPart>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TomlGradientPart {
    Number(f64),
    Text(String),
}

impl TomlGradientPart {
    fn describe(&self) -> String {
        match self {
            TomlGradientPart::Number(n) => n.to_string(),
            TomlGradientPart::Text(s) => s.clone(),
        }
    }
}

impl TomlBackground {
    fn into_background(self) -> Result<Background, ThemeError> {
        let parts = match self {
            TomlBackground::Solid(color) => return Ok(Background::Solid(normalize_color(&color))),
            TomlBackground::Gradient(parts) => parts,
        };

        let mut parts = parts.into_iter();
        let angle = match parts.next() {
            Some(TomlGradientPart::Number(n)) if n.is_finite() => n,
            Some(TomlGradientPart::Number(n)) => {
                return Err(ThemeError::InvalidGradientAngle(n.to_string()))
            }
            Some(TomlGradientPart::Text(s)) => parse_angle(&s)?,
            None => return Err(ThemeError::InvalidGradientAngle(String::new())),
        };
        let stops = parts
            .map(|part| match part {
                TomlGradientPart::Text(s) => Ok(s),
                other => Err(ThemeError::InvalidGradientStop(other.describe())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Background::Gradient { angle, stops })
    }
}

/// Built-in themes, keyed by name
const BUILTIN_THEMES: &str = r##"
[default]
title_color = "2f80ed"
icon_color = "4c71f2"
text_color = "434d58"
bg_color = "fffefe"
border_color = "e4e2e2"

[dark]
title_color = "fff"
icon_color = "79ff97"
text_color = "9f9f9f"
bg_color = "151515"
border_color = "e4e2e2"

[radical]
title_color = "fe428e"
icon_color = "f8d847"
text_color = "a9fef7"
bg_color = "141321"
border_color = "e4e2e2"

[transparent]
title_color = "006AFF"
icon_color = "0579C3"
text_color = "417E87"
bg_color = "ffffff00"
border_color = "e4e2e2"

[sunset]
title_color = "fff"
icon_color = "ffd166"
text_color = "fefefe"
bg_color = [35, "ff6b6b", "f06595", "845ef7"]
border_color = "e4e2e2"
"##;

fn builtin_themes() -> &'static BTreeMap<String, Theme> {
    static THEMES: OnceLock<BTreeMap<String, Theme>> = OnceLock::new();
    THEMES.get_or_init(|| {
        let raw: BTreeMap<String, TomlColors> =
            toml::from_str(BUILTIN_THEMES).expect("Built-in themes should be valid TOML");
        raw.into_iter()
            .map(|(name, colors)| {
                let theme = Theme::from_colors(colors, None)
                    .expect("Built-in themes should have valid backgrounds");
                (
                    name.clone(),
                    Theme {
                        name: Some(name),
                        ..theme
                    },
                )
            })
            .collect()
    })
}

impl Theme {
    /// Look up a built-in theme by name
    pub fn builtin(name: &str) -> Result<Self, ThemeError> {
        builtin_themes()
            .get(name)
            .cloned()
            .ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))
    }

    /// Names of all built-in themes, sorted
    pub fn builtin_names() -> Vec<&'static str> {
        builtin_themes().keys().map(|k| k.as_str()).collect()
    }

    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading theme file");
        Self::from_str(&content)
    }

    /// Load a theme from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;
        let base = parsed.metadata.as_ref().and_then(|m| m.base.as_deref());
        let theme = Self::from_colors(parsed.colors, base)?;

        Ok(Theme {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            ..theme
        })
    }

    /// Fill in colours missing from `colors` from the `base` theme.
    ///
    /// Without a base the hard-coded default palette is used. The ring colour
    /// follows the title colour unless given explicitly.
    fn from_colors(colors: TomlColors, base: Option<&str>) -> Result<Self, ThemeError> {
        let fallback = match base {
            Some(name) => Self::builtin(name)?,
            None => Self::fallback(),
        };
        let pick = |value: Option<String>, default: &str| {
            value
                .map(|v| normalize_color(&v))
                .unwrap_or_else(|| default.to_string())
        };

        let title_color = pick(colors.title_color, &fallback.title_color);
        let ring_color = match colors.ring_color {
            Some(ring) => normalize_color(&ring),
            None => title_color.clone(),
        };
        let bg_color = match colors.bg_color {
            Some(raw) => raw.into_background()?,
            None => fallback.bg_color.clone(),
        };

        Ok(Theme {
            name: None,
            description: None,
            text_color: pick(colors.text_color, &fallback.text_color),
            icon_color: pick(colors.icon_color, &fallback.icon_color),
            border_color: pick(colors.border_color, &fallback.border_color),
            title_color,
            ring_color,
            bg_color,
        })
    }

    /// Palette used when no base theme is available
    fn fallback() -> Self {
        Theme {
            name: None,
            description: None,
            title_color: "#2f80ed".to_string(),
            text_color: "#434d58".to_string(),
            icon_color: "#4c71f2".to_string(),
            border_color: "#e4e2e2".to_string(),
            ring_color: "#2f80ed".to_string(),
            bg_color: Background::Solid("#fffefe".to_string()),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::builtin("default").unwrap_or_else(|_| Self::fallback())
    }
}

/// Parse a gradient angle in degrees; NaN and infinities are rejected
fn parse_angle(value: &str) -> Result<f64, ThemeError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|angle| angle.is_finite())
        .ok_or_else(|| ThemeError::InvalidGradientAngle(value.to_string()))
}

/// Prefix bare hex colours (`fff`, `2f80ed`, `ffffff00`) with `#`.
///
/// Anything else (named colours, `rgb(...)`, values already prefixed) is
/// returned unchanged.
pub fn normalize_color(value: &str) -> String {
    let is_bare_hex = matches!(value.len(), 3 | 4 | 6 | 8)
        && value.chars().all(|c| c.is_ascii_hexdigit());
    if is_bare_hex {
        format!("#{}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.name.as_deref(), Some("default"));
        assert_eq!(theme.title_color, "#2f80ed");
        assert_eq!(theme.ring_color, "#2f80ed");
        assert_eq!(theme.bg_color, Background::Solid("#fffefe".to_string()));
    }

    #[test]
    fn test_builtin_names_sorted() {
        let names = Theme::builtin_names();
        assert_eq!(names, vec!["dark", "default", "radical", "sunset", "transparent"]);
    }

    #[test]
    fn test_unknown_builtin() {
        let err = Theme::builtin("nope").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownTheme(name) if name == "nope"));
    }

    #[test]
    fn test_builtin_gradient_theme() {
        let theme = Theme::builtin("sunset").unwrap();
        assert_eq!(
            theme.bg_color,
            Background::Gradient {
                angle: 35.0,
                stops: vec!["ff6b6b".into(), "f06595".into(), "845ef7".into()],
            }
        );
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Test Theme"
description = "A test theme"

[colors]
title_color = "#000000"
"##;
        let theme = Theme::from_str(toml_str).expect("Should parse");
        assert_eq!(theme.name, Some("Test Theme".to_string()));
        assert_eq!(theme.description, Some("A test theme".to_string()));
        assert_eq!(theme.title_color, "#000000");
        assert_eq!(theme.ring_color, "#000000");
        assert_eq!(theme.text_color, "#434d58");
    }

    #[test]
    fn test_parse_toml_with_base_theme() {
        let toml_str = r##"
[metadata]
base = "dark"

[colors]
ring_color = "ff0000"
"##;
        let theme = Theme::from_str(toml_str).expect("Should parse");
        assert_eq!(theme.name, None);
        assert_eq!(theme.title_color, "#fff");
        assert_eq!(theme.ring_color, "#ff0000");
        assert_eq!(theme.bg_color, Background::Solid("#151515".to_string()));
    }

    #[test]
    fn test_parse_toml_unknown_base() {
        let err = Theme::from_str("[metadata]\nbase = \"missing\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownTheme(_)));
    }

    #[test]
    fn test_parse_toml_gradient_background() {
        let toml_str = r##"
[colors]
bg_color = [90, "aa1100", "0011aa"]
"##;
        let theme = Theme::from_str(toml_str).expect("Should parse");
        assert_eq!(
            theme.bg_color,
            Background::Gradient {
                angle: 90.0,
                stops: vec!["aa1100".into(), "0011aa".into()],
            }
        );
    }

    #[test]
    fn test_parse_toml_gradient_bad_angle() {
        let err = Theme::from_str("[colors]\nbg_color = [\"left\", \"fff\"]\n").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidGradientAngle(a) if a == "left"));
    }

    #[test]
    fn test_parse_toml_gradient_nan_angle() {
        let err = Theme::from_str("[colors]\nbg_color = [nan, \"fff\", \"000\"]\n").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidGradientAngle(_)));
    }

    #[test]
    fn test_parse_toml_gradient_numeric_stop() {
        let err = Theme::from_str("[colors]\nbg_color = [10, \"fff\", 3]\n").unwrap_err();
        assert!(matches!(err, ThemeError::InvalidGradientStop(_)));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Theme::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(ThemeError::ParseError(_))));
    }

    #[test]
    fn test_background_parse_solid() {
        assert_eq!(
            Background::parse("fffefe").unwrap(),
            Background::Solid("#fffefe".to_string())
        );
        assert_eq!(
            Background::parse("rebeccapurple").unwrap(),
            Background::Solid("rebeccapurple".to_string())
        );
    }

    #[test]
    fn test_background_parse_gradient() {
        assert_eq!(
            Background::parse("35, f00, 0f0").unwrap(),
            Background::Gradient {
                angle: 35.0,
                stops: vec!["f00".into(), "0f0".into()],
            }
        );
    }

    #[test]
    fn test_background_parse_rejects_non_finite_angle() {
        for angle in ["NaN", "inf", "-infinity"] {
            let value = format!("{},f00,0f0", angle);
            assert!(
                matches!(
                    Background::parse(&value),
                    Err(ThemeError::InvalidGradientAngle(a)) if a == angle
                ),
                "{} accepted",
                angle
            );
        }
    }

    #[test]
    fn test_background_parse_bad_angle() {
        assert!(matches!(
            Background::parse("up,f00,0f0"),
            Err(ThemeError::InvalidGradientAngle(_))
        ));
    }

    #[test]
    fn test_gradient_stops_evenly_spread() {
        let bg = Background::Gradient {
            angle: 30.0,
            stops: vec!["aa1100".into(), "0011aa".into(), "00ff00".into()],
        };
        assert_eq!(
            bg.gradient_stops(),
            vec![(0.0, "aa1100"), (50.0, "0011aa"), (100.0, "00ff00")]
        );
    }

    #[test]
    fn test_single_stop_sits_at_zero() {
        let bg = Background::Gradient {
            angle: 0.0,
            stops: vec!["#abcdef".into()],
        };
        assert_eq!(bg.gradient_stops(), vec![(0.0, "abcdef")]);
    }

    #[test]
    fn test_empty_gradient_has_no_stops() {
        let bg = Background::Gradient {
            angle: 0.0,
            stops: vec![],
        };
        assert!(bg.gradient_stops().is_empty());
        assert!(Background::Solid("#fff".into()).gradient_stops().is_empty());
    }

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color("fff"), "#fff");
        assert_eq!(normalize_color("ffffff00"), "#ffffff00");
        assert_eq!(normalize_color("#123456"), "#123456");
        assert_eq!(normalize_color("red"), "red");
        assert_eq!(normalize_color("12345"), "12345");
    }
}
