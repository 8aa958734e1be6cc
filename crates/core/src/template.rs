//! Presentation-wide visual themes.
//!
//! Templates only change colours and decoration. They never influence
//! layout math, so pagination is identical across all three.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::canvas::{CONTENT_WIDTH, MARGIN, SLIDE_HEIGHT, SLIDE_WIDTH};
use crate::error::{Error, Result};

/// Colour used for titles and keyword emphasis on every template.
pub const TITLE_COLOR: &str = "2A6099";

/// Body text colour.
pub const BODY_COLOR: &str = "333333";

/// Colour for secondary text such as subtitles and notices.
pub const MUTED_COLOR: &str = "666666";

/// Colour for the cover date.
pub const FAINT_COLOR: &str = "999999";

/// A named visual theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Clean design with thin blue accent bars.
    #[default]
    Modern,
    /// Grey canvas with a heavy header and footer band.
    Academic,
    /// White canvas with a single hairline above the footer.
    Minimal,
}

/// A decorative shape drawn behind slide content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Chrome {
    /// A filled rectangle spanning the given area.
    Bar {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: &'static str,
    },
    /// A horizontal line.
    Rule {
        x: f64,
        y: f64,
        w: f64,
        color: &'static str,
        weight_pt: f64,
    },
}

/// Where and how the slide number footer is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideNumberStyle {
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub color: &'static str,
    pub font_face: &'static str,
}

const MODERN_CHROME: &[Chrome] = &[
    Chrome::Bar {
        x: 0.0,
        y: 0.0,
        w: SLIDE_WIDTH,
        h: 0.1,
        color: "2A6099",
    },
    Chrome::Bar {
        x: 0.0,
        y: SLIDE_HEIGHT - 0.1,
        w: SLIDE_WIDTH,
        h: 0.1,
        color: "2A6099",
    },
];

const ACADEMIC_CHROME: &[Chrome] = &[
    Chrome::Bar {
        x: 0.0,
        y: 0.0,
        w: SLIDE_WIDTH,
        h: 0.5,
        color: "4472C4",
    },
    Chrome::Bar {
        x: 0.0,
        y: SLIDE_HEIGHT - 0.3,
        w: SLIDE_WIDTH,
        h: 0.3,
        color: "4472C4",
    },
];

const MINIMAL_CHROME: &[Chrome] = &[Chrome::Rule {
    x: MARGIN,
    y: SLIDE_HEIGHT - 0.5,
    w: CONTENT_WIDTH,
    color: "DADADA",
    weight_pt: 1.0,
}];

impl Template {
    /// Every available template, in display order.
    pub const ALL: [Template; 3] = [Template::Modern, Template::Academic, Template::Minimal];

    /// Stable identifier used in requests.
    pub fn id(&self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Academic => "academic",
            Template::Minimal => "minimal",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Template::Modern => "Modern",
            Template::Academic => "Academic",
            Template::Minimal => "Minimal",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Template::Modern => "Clean and modern design with blue accent colors",
            Template::Academic => "Professional template for educational presentations",
            Template::Minimal => "Simple and minimalistic design",
        }
    }

    /// Solid background fill as an RGB hex string.
    pub fn background(&self) -> &'static str {
        match self {
            Template::Modern | Template::Minimal => "FFFFFF",
            Template::Academic => "F8F9FA",
        }
    }

    /// Decoration drawn on every slide.
    pub fn chrome(&self) -> &'static [Chrome] {
        match self {
            Template::Modern => MODERN_CHROME,
            Template::Academic => ACADEMIC_CHROME,
            Template::Minimal => MINIMAL_CHROME,
        }
    }

    pub fn slide_number(&self) -> SlideNumberStyle {
        let (y, font_size, color) = match self {
            Template::Modern => (SLIDE_HEIGHT - 0.5, 12.0, "2A6099"),
            Template::Academic => (SLIDE_HEIGHT - 0.25, 12.0, "FFFFFF"),
            Template::Minimal => (SLIDE_HEIGHT - 0.4, 11.0, "999999"),
        };
        SlideNumberStyle {
            x: SLIDE_WIDTH - 1.0,
            y,
            font_size,
            color,
            font_face: "Arial",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Template::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownTemplate(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template_ids() {
        assert_eq!("modern".parse::<Template>().unwrap(), Template::Modern);
        assert_eq!("ACADEMIC".parse::<Template>().unwrap(), Template::Academic);
        assert_eq!(" Minimal ".parse::<Template>().unwrap(), Template::Minimal);
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let err = "retro".parse::<Template>().unwrap_err();
        assert!(matches!(err, Error::UnknownTemplate(ref id) if id == "retro"));
    }

    #[test]
    fn test_chrome_stays_on_canvas() {
        for template in Template::ALL {
            for shape in template.chrome() {
                let (x, y, w) = match *shape {
                    Chrome::Bar { x, y, w, .. } => (x, y, w),
                    Chrome::Rule { x, y, w, .. } => (x, y, w),
                };
                assert!(x >= 0.0 && x + w <= SLIDE_WIDTH + 1e-9);
                assert!(y >= 0.0 && y <= SLIDE_HEIGHT);
            }
            let number = template.slide_number();
            assert!(number.x < SLIDE_WIDTH && number.y < SLIDE_HEIGHT);
        }
    }

    #[test]
    fn test_template_serializes_as_id() {
        assert_eq!(
            serde_json::to_string(&Template::Academic).unwrap(),
            r#""academic""#
        );
    }
}
