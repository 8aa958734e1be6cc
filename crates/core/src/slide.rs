//! Physical slides: positioned text boxes and images ready for serialization.

use crate::canvas::Frame;
use crate::qr::ImageFormat;
use crate::template::{BODY_COLOR, MUTED_COLOR, TITLE_COLOR};

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Vertical anchoring of text within its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Middle,
}

/// Character and paragraph formatting for a text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub font_size: f64,
    /// RGB hex colour.
    pub color: &'static str,
    pub bold: bool,
    pub italic: bool,
    pub align: Align,
    pub anchor: Anchor,
    /// Bullet nesting level, `None` for plain text.
    pub bullet: Option<u32>,
    pub font_face: &'static str,
}

impl TextStyle {
    /// Plain body text.
    pub fn body(font_size: f64) -> Self {
        Self {
            font_size,
            color: BODY_COLOR,
            bold: false,
            italic: false,
            align: Align::Left,
            anchor: Anchor::Top,
            bullet: None,
            font_face: "Arial",
        }
    }

    /// Bold accent-coloured slide title.
    pub fn title(font_size: f64) -> Self {
        Self {
            color: TITLE_COLOR,
            bold: true,
            anchor: Anchor::Middle,
            ..Self::body(font_size)
        }
    }

    /// Secondary grey text.
    pub fn muted(font_size: f64) -> Self {
        Self {
            color: MUTED_COLOR,
            ..Self::body(font_size)
        }
    }

    pub fn with_bullet(mut self, level: u32) -> Self {
        self.bullet = Some(level);
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_color(mut self, color: &'static str) -> Self {
        self.color = color;
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A span of text, optionally emphasized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub emphasis: bool,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: true,
        }
    }
}

/// A text box on a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub frame: Frame,
    pub runs: Vec<TextRun>,
    pub style: TextStyle,
}

impl TextBox {
    /// A text box with a single unemphasized run.
    pub fn plain(frame: Frame, text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            frame,
            runs: vec![TextRun::plain(text)],
            style,
        }
    }

    /// The concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// An embedded picture.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBox {
    pub frame: Frame,
    pub data: Vec<u8>,
    pub format: ImageFormat,
    /// Alternative text.
    pub description: String,
}

/// Anything drawn on a slide.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text(TextBox),
    Image(ImageBox),
}

/// Record of where a content block (or one chunk of it) landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index of the block within its logical slide.
    pub block: usize,
    /// Cursor position when the chunk was placed.
    pub top: f64,
    pub height: f64,
}

/// What a physical slide was created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    /// The deck's title slide.
    Cover,
    /// First page of a logical slide.
    Content,
    /// Overflow page of a logical slide.
    Continuation,
    /// Stand-in for a logical slide that failed to lay out.
    Fallback,
}

/// One page of the output deck.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalSlide {
    pub kind: SlideKind,
    /// Index of the logical slide this page belongs to.
    pub source: Option<usize>,
    pub elements: Vec<Element>,
    pub placements: Vec<Placement>,
}

impl PhysicalSlide {
    pub fn new(kind: SlideKind, source: Option<usize>) -> Self {
        Self {
            kind,
            source,
            elements: Vec::new(),
            placements: Vec::new(),
        }
    }

    pub fn is_continuation(&self) -> bool {
        self.kind == SlideKind::Continuation
    }

    pub fn push_text(&mut self, text: TextBox) {
        self.elements.push(Element::Text(text));
    }

    pub fn push_image(&mut self, image: ImageBox) {
        self.elements.push(Element::Image(image));
    }

    /// Text of every text box, in placement order.
    pub fn texts(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Text(t) => Some(t.text()),
                Element::Image(_) => None,
            })
            .collect()
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageBox> {
        self.elements.iter().filter_map(|e| match e {
            Element::Image(i) => Some(i),
            Element::Text(_) => None,
        })
    }

    /// Indices of the content blocks with at least one chunk on this page.
    pub fn block_indices(&self) -> Vec<usize> {
        let mut blocks: Vec<usize> = self.placements.iter().map(|p| p.block).collect();
        blocks.dedup();
        blocks
    }
}
