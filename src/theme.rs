//! Theme configuration: page geometry, colors, type scale, layout options.
//!
//! Themes are plain JSON records loaded at start and immutable afterwards.
//! The shrink-to-fit loop derives fresh scaled copies; it never mutates the
//! theme it was given.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An RGB color with components in `0.0..=1.0`.
///
/// Serialized as a 3-element JSON array, matching the theme file format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Create a color from components.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for [f64; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Page dimensions and margin, in points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

/// Theme color table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    /// Full-page background fill; page stays white when absent
    #[serde(default)]
    pub background: Option<Color>,

    /// Primary text color
    pub text: Color,

    /// Muted color for taglines and section headings
    pub muted: Color,

    /// Horizontal rule stroke color
    pub rule: Color,

    /// Left panel fill for two-column themes
    #[serde(default)]
    pub panel_fill: Option<Color>,
}

/// Font sizes and line leading, in points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TypeScale {
    pub title_size: f64,
    pub tagline_size: f64,
    pub h2_size: f64,
    pub body_size: f64,
    pub mono_size: f64,
    pub leading: f64,
}

/// Title alignment within the usable content area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleAlign {
    #[default]
    Left,
    Center,
}

/// Spacing and structural layout options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Vertical gap before each section heading
    pub section_gap: f64,

    /// Vertical gap below the header rule
    pub rule_gap: f64,

    /// Title (and tagline) alignment
    #[serde(default)]
    pub title_align: TitleAlign,

    /// Render screen-summary sections as a two-column grid beside a side panel
    #[serde(default)]
    pub two_column_ui: bool,

    /// Width of the side panel, required when `two_column_ui` is set
    #[serde(default)]
    pub left_panel_width: Option<f64>,
}

/// A named, fully-specified set of geometric and typographic parameters
/// driving layout, independent of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub page: PageGeometry,
    pub colors: Palette,
    #[serde(rename = "type")]
    pub type_scale: TypeScale,
    pub layout: LayoutOptions,
}

impl Theme {
    /// Load a theme from its JSON encoding.
    pub fn from_json(json: &str) -> Result<Self> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Check the theme for values layout cannot work with.
    pub fn validate(&self) -> Result<()> {
        let t = &self.type_scale;
        let sizes = [
            ("title_size", t.title_size),
            ("tagline_size", t.tagline_size),
            ("h2_size", t.h2_size),
            ("body_size", t.body_size),
            ("mono_size", t.mono_size),
            ("leading", t.leading),
        ];
        for (name, value) in sizes {
            if value <= 0.0 {
                return Err(Error::Theme(format!("{name} must be positive, got {value}")));
            }
        }
        if self.page.width <= 0.0 || self.page.height <= 0.0 {
            return Err(Error::Theme("page dimensions must be positive".to_string()));
        }
        if self.layout.two_column_ui && self.layout.left_panel_width.is_none() {
            return Err(Error::Theme(
                "two_column_ui requires left_panel_width".to_string(),
            ));
        }
        Ok(())
    }

    /// Derive a fresh theme with every type size and both gap values
    /// multiplied by `factor`. Page geometry and colors are unchanged.
    pub fn scaled(&self, factor: f64) -> Theme {
        debug_assert!(factor > 0.0, "scale factor must be positive");
        let mut theme = self.clone();
        let t = &mut theme.type_scale;
        t.title_size *= factor;
        t.tagline_size *= factor;
        t.h2_size *= factor;
        t.body_size *= factor;
        t.mono_size *= factor;
        t.leading *= factor;
        theme.layout.section_gap *= factor;
        theme.layout.rule_gap *= factor;
        theme
    }

    /// Built-in single-column theme: centered title on a white US Letter
    /// page, generous margins, no panel.
    pub fn minimal() -> Theme {
        Theme {
            name: "minimal".to_string(),
            page: PageGeometry {
                width: 612.0,
                height: 792.0,
                margin: 54.0,
            },
            colors: Palette {
                background: None,
                text: Color::new(0.10, 0.10, 0.12),
                muted: Color::new(0.45, 0.45, 0.48),
                rule: Color::new(0.78, 0.78, 0.80),
                panel_fill: None,
            },
            type_scale: TypeScale {
                title_size: 26.0,
                tagline_size: 12.0,
                h2_size: 13.0,
                body_size: 10.5,
                mono_size: 9.5,
                leading: 13.5,
            },
            layout: LayoutOptions {
                section_gap: 10.0,
                rule_gap: 12.0,
                title_align: TitleAlign::Center,
                two_column_ui: false,
                left_panel_width: None,
            },
        }
    }

    /// Built-in two-column theme: tinted page with a filled side panel and
    /// screen summaries rendered as a grid.
    pub fn designed() -> Theme {
        Theme {
            name: "designed".to_string(),
            page: PageGeometry {
                width: 612.0,
                height: 792.0,
                margin: 42.0,
            },
            colors: Palette {
                background: Some(Color::new(0.985, 0.975, 0.955)),
                text: Color::new(0.13, 0.12, 0.11),
                muted: Color::new(0.48, 0.44, 0.40),
                rule: Color::new(0.72, 0.66, 0.58),
                panel_fill: Some(Color::new(0.93, 0.90, 0.85)),
            },
            type_scale: TypeScale {
                title_size: 23.0,
                tagline_size: 11.5,
                h2_size: 12.5,
                body_size: 10.0,
                mono_size: 9.0,
                leading: 13.0,
            },
            layout: LayoutOptions {
                section_gap: 9.0,
                rule_gap: 11.0,
                title_align: TitleAlign::Left,
                two_column_ui: true,
                left_panel_width: Some(148.0),
            },
        }
    }
}
