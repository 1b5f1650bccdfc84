use serde::Deserialize;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub font: FontConfig,
    pub headings: HeadingConfig,
    pub links: LinksConfig,
    pub list: ListConfig,
    pub rule: RuleConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Ubuntu Monospace".to_string(),
            size: 10.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeadingConfig {
    pub h1_scale: f32,
    pub h2_scale: f32,
    pub h3_scale: f32,
    pub h4_scale: f32,
    pub h5_scale: f32,
    pub h6_scale: f32,
    pub h6_color: String,
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            h1_scale: 1.98,
            h2_scale: 1.728,
            h3_scale: 1.44,
            h4_scale: 1.2,
            h5_scale: 1.0,
            h6_scale: 1.0,
            h6_color: "gray".to_string(),
        }
    }
}

impl HeadingConfig {
    /// Size scale for a heading level. Out-of-range levels get the
    /// level-5 scale, matching the renderer's style fallback.
    pub fn scale_for_level(&self, level: u8) -> f32 {
        match level {
            1 => self.h1_scale,
            2 => self.h2_scale,
            3 => self.h3_scale,
            4 => self.h4_scale,
            5 => self.h5_scale,
            6 => self.h6_scale,
            _ => self.h5_scale,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub color: String,
    pub underline: bool,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            color: "blue".to_string(),
            underline: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub bullet: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            bullet: "\u{2022}".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub glyph: String,
    pub width: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            glyph: "\u{2015}".to_string(),
            width: 24,
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// The built-in configuration embedded at compile time.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }
}
