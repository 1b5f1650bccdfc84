use crate::config::Config;

/// Semantic style names the renderer attaches to runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Default,
    Bold,
    Italic,
    BoldItalic,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Link,
}

impl Style {
    /// Style for a heading level. The parser only produces levels 1-6;
    /// anything else falls back to `Heading5`.
    pub fn heading(level: u8) -> Self {
        match level {
            1 => Self::Heading1,
            2 => Self::Heading2,
            3 => Self::Heading3,
            4 => Self::Heading4,
            5 => Self::Heading5,
            6 => Self::Heading6,
            _ => Self::Heading5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slant {
    Normal,
    Italic,
}

/// Font descriptor handed to the display surface for one style.
///
/// `size_scale` is relative to the surface's base size so the same
/// table works at any zoom level.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size_scale: f32,
    pub weight: Weight,
    pub slant: Slant,
    pub foreground: Option<String>,
    pub underline: bool,
}

/// Fixed mapping from semantic style name to font descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTable {
    default: FontSpec,
    bold: FontSpec,
    italic: FontSpec,
    bold_italic: FontSpec,
    heading1: FontSpec,
    heading2: FontSpec,
    heading3: FontSpec,
    heading4: FontSpec,
    heading5: FontSpec,
    heading6: FontSpec,
    link: FontSpec,
}

impl StyleTable {
    pub fn from_config(config: &Config) -> Self {
        let font = |scale: f32, weight: Weight, slant: Slant| FontSpec {
            family: config.font.family.clone(),
            size_scale: scale,
            weight,
            slant,
            foreground: None,
            underline: false,
        };
        let heading = |level: u8| {
            font(
                config.headings.scale_for_level(level),
                Weight::Bold,
                Slant::Normal,
            )
        };

        Self {
            default: font(1.0, Weight::Normal, Slant::Normal),
            bold: font(1.0, Weight::Bold, Slant::Normal),
            italic: font(1.0, Weight::Normal, Slant::Italic),
            bold_italic: font(1.0, Weight::Bold, Slant::Italic),
            heading1: heading(1),
            heading2: heading(2),
            heading3: heading(3),
            heading4: heading(4),
            heading5: heading(5),
            heading6: FontSpec {
                foreground: Some(config.headings.h6_color.clone()),
                ..heading(6)
            },
            link: FontSpec {
                foreground: Some(config.links.color.clone()),
                underline: config.links.underline,
                ..font(1.0, Weight::Normal, Slant::Normal)
            },
        }
    }

    /// The font descriptor for a style name.
    pub fn font(&self, style: Style) -> &FontSpec {
        match style {
            Style::Default => &self.default,
            Style::Bold => &self.bold,
            Style::Italic => &self.italic,
            Style::BoldItalic => &self.bold_italic,
            Style::Heading1 => &self.heading1,
            Style::Heading2 => &self.heading2,
            Style::Heading3 => &self.heading3,
            Style::Heading4 => &self.heading4,
            Style::Heading5 => &self.heading5,
            Style::Heading6 => &self.heading6,
            Style::Link => &self.link,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Slant, Style, StyleTable, Weight};
    use crate::config::Config;

    #[test]
    fn heading_selection_falls_back_to_level_five() {
        assert_eq!(Style::heading(2), Style::Heading2);
        assert_eq!(Style::heading(6), Style::Heading6);
        assert_eq!(Style::heading(7), Style::Heading5);
        assert_eq!(Style::heading(0), Style::Heading5);
    }

    #[test]
    fn headings_are_bold_and_scaled() {
        let table = StyleTable::from_config(&Config::default());
        let h1 = table.font(Style::Heading1);
        assert_eq!(h1.weight, Weight::Bold);
        assert_eq!(h1.size_scale, 1.98);
        assert_eq!(h1.foreground, None);
    }

    #[test]
    fn level_six_heading_is_tinted() {
        let table = StyleTable::from_config(&Config::default());
        let h6 = table.font(Style::Heading6);
        assert_eq!(h6.foreground.as_deref(), Some("gray"));
        assert_eq!(h6.size_scale, 1.0);
    }

    #[test]
    fn link_style_follows_config() {
        let mut config = Config::default();
        config.links.color = "#1a4f8b".to_string();
        config.links.underline = false;
        let table = StyleTable::from_config(&config);
        let link = table.font(Style::Link);
        assert_eq!(link.foreground.as_deref(), Some("#1a4f8b"));
        assert!(!link.underline);
        assert_eq!(link.weight, Weight::Normal);
    }

    #[test]
    fn emphasis_styles_cross_weight_and_slant() {
        let table = StyleTable::from_config(&Config::default());
        assert_eq!(table.font(Style::Bold).weight, Weight::Bold);
        assert_eq!(table.font(Style::Italic).slant, Slant::Italic);
        let both = table.font(Style::BoldItalic);
        assert_eq!(both.weight, Weight::Bold);
        assert_eq!(both.slant, Slant::Italic);
    }
}
