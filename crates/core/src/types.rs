//! Domain types for representing deck content before and after layout.

use serde::{Deserialize, Serialize};

use crate::template::Template;

/// The kind of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Free-flowing text, split across slides when too long.
    Paragraph,
    /// A single bullet point, never split.
    Bullet,
    /// A QR code; the block text is the encoded URL.
    QrCode,
}

/// One paragraph, bullet or QR code within a logical slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// What kind of block this is.
    #[serde(rename = "type", alias = "kind")]
    pub kind: BlockKind,

    /// Display text, or the URL for QR code blocks.
    pub text: String,

    /// Nesting depth for bullets.
    #[serde(default)]
    pub level: u32,
}

impl ContentBlock {
    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text: text.into(),
            level: 0,
        }
    }

    /// Create a top-level bullet block.
    pub fn bullet(text: impl Into<String>) -> Self {
        Self::nested_bullet(text, 0)
    }

    /// Create a bullet block at the given nesting level.
    pub fn nested_bullet(text: impl Into<String>, level: u32) -> Self {
        Self {
            kind: BlockKind::Bullet,
            text: text.into(),
            level,
        }
    }

    /// Create a QR code block for a URL.
    pub fn qr_code(url: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::QrCode,
            text: url.into(),
            level: 0,
        }
    }

    /// Whether the block has no visible text and should be dropped before layout.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One semantic unit of content, independent of final pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalSlide {
    /// Slide title. Long titles are shortened when rendered.
    pub title: String,

    /// Content blocks in display order.
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,

    /// Terms rendered in bold wherever they appear as whole words.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl LogicalSlide {
    /// Create an empty logical slide with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// Append a content block.
    pub fn with_block(mut self, block: ContentBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Append several content blocks.
    pub fn with_blocks(mut self, blocks: impl IntoIterator<Item = ContentBlock>) -> Self {
        self.blocks.extend(blocks);
        self
    }

    /// Replace the emphasis keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Blocks that carry visible text, in order.
    pub fn visible_blocks(&self) -> impl Iterator<Item = (usize, &ContentBlock)> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| !block.is_blank())
    }
}

/// A structured article as stored by the scraper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article headline.
    #[serde(default)]
    pub title: Option<String>,

    /// Lead paragraph.
    #[serde(default)]
    pub intro: Option<String>,

    /// Body sections in order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Article {
    /// Render the article as plain text for the text-generation collaborator.
    pub fn to_prompt_text(&self) -> String {
        let mut text = format!("Title: {}\n\n", self.title.as_deref().unwrap_or_default());

        if let Some(intro) = self.intro.as_deref().filter(|i| !i.is_empty()) {
            text.push_str(&format!("Introduction: {}\n\n", intro));
        }

        for section in &self.sections {
            let heading = section
                .heading
                .as_deref()
                .filter(|h| !h.is_empty())
                .unwrap_or("Content");
            text.push_str(&format!("Section: {}\n", heading));
            if let Some(content) = section.content.as_deref().filter(|c| !c.is_empty()) {
                text.push_str(content);
                text.push('\n');
            }
            for bullet in &section.bullets {
                text.push_str(&format!("- {}\n", bullet.content));
            }
            text.push('\n');
        }

        text
    }
}

/// One section of a structured article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading, often phrased as a question.
    #[serde(default)]
    pub heading: Option<String>,

    /// Section body text.
    #[serde(default)]
    pub content: Option<String>,

    /// Bullet points scraped for this section.
    #[serde(default, alias = "section_bullets")]
    pub bullets: Vec<ArticleBullet>,
}

/// A scraped bullet point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleBullet {
    /// Bullet text.
    #[serde(default)]
    pub content: String,
}

impl ArticleBullet {
    /// Create a bullet from text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Everything the assembler needs to produce a presentation file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationRequest {
    /// Deck title, shown on the cover slide.
    pub title: String,

    /// Optional cover subtitle.
    #[serde(default)]
    pub subtitle: Option<String>,

    /// Visual theme applied to every slide.
    pub template: Template,

    /// Content in presentation order.
    pub slides: Vec<LogicalSlide>,
}

impl PresentationRequest {
    /// Create a request with no subtitle.
    pub fn new(title: impl Into<String>, template: Template, slides: Vec<LogicalSlide>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            template,
            slides,
        }
    }

    /// Set the cover subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// File name offered for the generated artifact.
    pub fn suggested_filename(&self) -> String {
        suggested_filename(&self.title)
    }
}

/// Derive a download file name from a deck title.
///
/// Every character that is not an ASCII letter or digit becomes `_`.
pub fn suggested_filename(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_presentation.pptx", slug)
}
