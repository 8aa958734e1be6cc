//! Loading build inputs from JSON files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use deck_core::{Article, LogicalSlide};
use serde_json::Value;

/// A single input file: either a scraped article or ready-made slides.
#[derive(Debug)]
pub enum DeckInput {
    Article(Article),
    Slides(Vec<LogicalSlide>),
}

pub fn load_input(path: &Path) -> Result<DeckInput> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_input(&text).with_context(|| {
        format!(
            "{} is neither an article object nor an array of slides",
            path.display()
        )
    })
}

/// A top-level array is a slide list; anything else must be an article.
pub fn parse_input(text: &str) -> Result<DeckInput> {
    let value: Value = serde_json::from_str(text)?;
    if value.is_array() {
        Ok(DeckInput::Slides(serde_json::from_value(value)?))
    } else {
        Ok(DeckInput::Article(serde_json::from_value(value)?))
    }
}
