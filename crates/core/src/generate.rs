//! AI-backed generation of logical slides from raw article text.
//!
//! The text-generation service is a collaborator behind [`TextGenerator`].
//! Whatever it does wrong (network failure, prose instead of JSON, missing
//! fields) the generator answers with a fixed fallback slide, so deck
//! generation never fails because of it.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::{BlockKind, ContentBlock, LogicalSlide};

/// Title of the fallback slide when no context title is known.
pub const FALLBACK_TITLE: &str = "Key Information";

/// A text-completion collaborator.
///
/// Implementations are expected to apply their own timeouts and retry or
/// circuit-breaking policy.
pub trait TextGenerator {
    /// Complete the prompt, returning the raw response text.
    fn complete(&self, prompt: &str) -> Result<String>;
}

impl<G: TextGenerator + ?Sized> TextGenerator for &G {
    fn complete(&self, prompt: &str) -> Result<String> {
        (**self).complete(prompt)
    }
}

impl<G: TextGenerator + ?Sized> TextGenerator for Box<G> {
    fn complete(&self, prompt: &str) -> Result<String> {
        (**self).complete(prompt)
    }
}

/// Turns raw article text into logical slides through a [`TextGenerator`].
#[derive(Debug, Clone)]
pub struct SlideGenerator<G> {
    generator: G,
    fallback_title: String,
}

impl<G: TextGenerator> SlideGenerator<G> {
    /// Wrap a text-generation collaborator.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            fallback_title: FALLBACK_TITLE.to_string(),
        }
    }

    /// Title used for the fallback slide when no context title is given.
    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = title.into();
        self
    }

    /// Generate logical slides for an article.
    ///
    /// Never fails: any collaborator or parsing error yields the one-element
    /// fallback list from [`fallback_slides`].
    pub fn generate_slides(&self, article_text: &str, title: Option<&str>) -> Vec<LogicalSlide> {
        match self.try_generate(article_text, title) {
            Ok(slides) => {
                log::debug!("Generated {} slides from article text", slides.len());
                slides
            }
            Err(e) => {
                log::warn!("AI slide generation failed, using fallback content: {}", e);
                let title = title
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or(self.fallback_title.as_str());
                fallback_slides(Some(title))
            }
        }
    }

    fn try_generate(&self, article_text: &str, title: Option<&str>) -> Result<Vec<LogicalSlide>> {
        let prompt = build_slide_prompt(article_text, title);
        let response = self.generator.complete(&prompt)?;
        if response.trim().is_empty() {
            return Err(Error::ResponseFormat("empty response".to_string()));
        }
        log::debug!("Raw generation response: {} characters", response.len());
        parse_slides_response(&response)
    }
}

/// The single slide used whenever generation fails.
pub fn fallback_slides(title: Option<&str>) -> Vec<LogicalSlide> {
    let title = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(FALLBACK_TITLE);

    vec![LogicalSlide::new(title)
        .with_block(ContentBlock::bullet(
            "Critical policy developments and their implications.",
        ))
        .with_block(ContentBlock::bullet(
            "Impact on governance and administrative frameworks.",
        ))
        .with_keywords(["Policy", "Governance", "Important"])]
}

/// Build the prompt asking for 3-5 analytical slides as a JSON array.
pub fn build_slide_prompt(article_text: &str, title: Option<&str>) -> String {
    let topic = title
        .filter(|t| !t.trim().is_empty())
        .map(|t| format!("Topic: {}\n", t.trim()))
        .unwrap_or_default();

    format!(
        r#"You are a top-tier analyst and presentation creator for UPSC and State Service exam aspirants. Transform the news article below into insightful, analytical, examination-focused slides.

CRITICAL REQUIREMENTS:
- Each bullet point must be descriptive and meaningful, explaining the context or significance of the information, not just stating a fact.
- Each slide must contain 2-4 detailed, distinct and substantial bullet points of roughly 30-40 words.
- Focus on implications, challenges and significance for India.
- Use clear, professional language. Avoid starting points with "The article states".

ANALYTICAL DIMENSIONS:
1. Constitutional/Legal: legal provisions, court judgments, Acts and amendments.
2. Governance/Administrative: administration, policy implementation and reforms.
3. Socio-Economic: effects on society, economy, growth and development.
4. Geopolitical/Strategic: international relations and national security.

JSON OUTPUT FORMAT (respond ONLY with this JSON array):
[
  {{
    "title": "Concise & Specific Slide Title (max 12 words)",
    "blocks": [
      {{ "type": "bullet", "text": "A detailed, descriptive point that provides context and meaning." }}
    ],
    "keywords": ["Keyword1", "RelevantTerm", "PolicyName"]
  }}
]

Now generate 3-5 slides for the following article.

{topic}Article Content:
---
{article_text}
---

RESPOND WITH ONLY THE JSON ARRAY:"#
    )
}

/// Parse and validate a generation response into logical slides.
///
/// Markdown code fences are stripped and the JSON array is taken from the
/// first `[` to the last `]`.
pub fn parse_slides_response(response: &str) -> Result<Vec<LogicalSlide>> {
    let body = strip_code_fence(response.trim());

    let start = body.find('[');
    let end = body.rfind(']');
    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &body[start..=end],
        _ => {
            return Err(Error::ResponseFormat(
                "response does not contain a JSON array".to_string(),
            ))
        }
    };

    let value: Value = serde_json::from_str(json)?;
    let items = value
        .as_array()
        .ok_or_else(|| Error::ResponseFormat("top-level value is not an array".to_string()))?;

    items.iter().map(slide_from_value).collect()
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

fn slide_from_value(item: &Value) -> Result<LogicalSlide> {
    let missing = || {
        Error::ResponseFormat(
            "a slide has a missing or invalid 'title', 'blocks' or 'keywords'".to_string(),
        )
    };

    let object = item.as_object().ok_or_else(missing)?;
    let title = object.get("title").and_then(Value::as_str).ok_or_else(missing)?;
    let blocks = object.get("blocks").and_then(Value::as_array).ok_or_else(missing)?;
    let keywords = object.get("keywords").and_then(Value::as_array).ok_or_else(missing)?;

    let blocks = blocks.iter().map(block_from_value).collect::<Result<Vec<_>>>()?;
    let keywords: Vec<&str> = keywords.iter().filter_map(Value::as_str).collect();

    Ok(LogicalSlide::new(title)
        .with_blocks(blocks)
        .with_keywords(keywords))
}

fn block_from_value(block: &Value) -> Result<ContentBlock> {
    let malformed = || {
        Error::ResponseFormat(
            "a content block must have type 'paragraph' or 'bullet' and a string 'text'".to_string(),
        )
    };

    let kind = match block.get("type").and_then(Value::as_str) {
        Some("paragraph") => BlockKind::Paragraph,
        Some("bullet") => BlockKind::Bullet,
        _ => return Err(malformed()),
    };
    let text = block.get("text").and_then(Value::as_str).ok_or_else(malformed)?;
    let level = block
        .get("level")
        .and_then(Value::as_u64)
        .and_then(|l| u32::try_from(l).ok())
        .unwrap_or(0);

    Ok(ContentBlock {
        kind,
        text: text.to_string(),
        level,
    })
}
