//! Deterministic extraction of logical slides from structured articles.
//!
//! Scraped articles arrive as an intro plus a list of sections. Each section
//! becomes one logical slide with its body paragraph (when substantial) and up
//! to six bullets, topped up by sentence-splitting the body when the scraper
//! found too few bullet points.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

use crate::types::{Article, ContentBlock, LogicalSlide, Section};

/// Title of the slide built from an article intro.
pub const INTRO_SLIDE_TITLE: &str = "Introduction & Context";

/// Maximum bullets per section slide.
const MAX_BULLETS: usize = 6;

/// Sections with fewer bullets than this get extra bullets from their body text.
const MIN_BULLETS: usize = 5;

/// Body text must be longer than this to be shown as a paragraph.
const MIN_PARAGRAPH_CHARS: usize = 50;

/// Scraped bullets must be longer than this to be kept.
const MIN_SCRAPED_BULLET_CHARS: usize = 15;

/// Accepted length range for bullets synthesized from body text.
const SYNTHESIZED_BULLET_CHARS: std::ops::Range<usize> = 20..200;

/// Maximum keywords per slide.
const MAX_KEYWORDS: usize = 7;

/// Governance and policy vocabulary scanned for emphasis keywords.
const IMPORTANT_TERMS: &[&str] = &[
    "India",
    "Government",
    "Policy",
    "Act",
    "Bill",
    "Ordinance",
    "Supreme Court",
    "Parliament",
    "Minister",
    "PM",
    "President",
    "State",
    "Central",
    "Constitutional",
    "Amendment",
    "Economic",
    "Social",
    "Development",
    "Growth",
    "Reform",
    "Security",
    "Defence",
    "International",
    "Global",
    "Strategic",
    "National",
    "Regional",
    "Geopolitical",
    "UPSC",
    "Governance",
    "Scheme",
    "Mission",
    "Commission",
    "Judiciary",
    "Framework",
];

/// Runs of non-terminator characters closed by sentence punctuation.
static SENTENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());

/// Clause separators used when a body has too few full sentences.
static CLAUSE_SPLIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[;,]\s+").unwrap());

/// Question-style prefixes stripped from section headings.
static HEADING_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(what\s+(is|are)|why|how)\s+").unwrap());

static TRAILING_QUESTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\?+$").unwrap());

/// Extract logical slides from a structured article.
///
/// Sections that produce no blocks are skipped, so the result may be empty.
pub fn extract_slides_from_article(article: &Article) -> Vec<LogicalSlide> {
    let mut slides = Vec::new();

    if let Some(intro) = article.intro.as_deref().map(clean_text) {
        if !intro.is_empty() {
            let keywords = extract_keywords(&intro);
            slides.push(
                LogicalSlide::new(INTRO_SLIDE_TITLE)
                    .with_block(ContentBlock::paragraph(intro))
                    .with_keywords(keywords),
            );
        }
    }

    for (index, section) in article.sections.iter().enumerate() {
        match extract_section(section, index) {
            Some(slide) => slides.push(slide),
            None => log::debug!("Section {} produced no content, skipping", index + 1),
        }
    }

    slides
}

/// Build the logical slide for one article section.
fn extract_section(section: &Section, index: usize) -> Option<LogicalSlide> {
    let body = section.content.as_deref().map(clean_text).unwrap_or_default();
    let mut blocks = Vec::new();

    if body.chars().count() > MIN_PARAGRAPH_CHARS {
        blocks.push(ContentBlock::paragraph(body.clone()));
    }

    let mut bullets: Vec<String> = section
        .bullets
        .iter()
        .map(|b| clean_text(&b.content))
        .filter(|text| text.chars().count() > MIN_SCRAPED_BULLET_CHARS)
        .take(MAX_BULLETS)
        .map(|text| normalize_bullet(&text))
        .collect();

    if bullets.len() < MIN_BULLETS && !body.is_empty() {
        let missing = MAX_BULLETS - bullets.len();
        bullets.extend(bullets_from_text(&body, missing));
    }

    blocks.extend(bullets.into_iter().map(ContentBlock::bullet));

    if blocks.is_empty() {
        return None;
    }

    let heading = section
        .heading
        .as_deref()
        .map(clean_text)
        .filter(|h| !h.is_empty());
    let title = match heading.as_deref() {
        Some(heading) => clean_section_title(heading),
        None => clean_section_title(&format!("Key Point {}", index + 1)),
    };

    let keyword_source = if body.is_empty() {
        heading.unwrap_or_default()
    } else {
        body
    };

    Some(
        LogicalSlide::new(title)
            .with_blocks(blocks)
            .with_keywords(extract_keywords(&keyword_source)),
    )
}

/// Compose scraped text to NFC and trim it.
fn clean_text(text: &str) -> String {
    text.nfc().collect::<String>().trim().to_string()
}

/// Scan text for known domain terms, case-insensitively.
///
/// Returns at most seven distinct terms, in vocabulary order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lower = text.to_lowercase();
    IMPORTANT_TERMS
        .iter()
        .filter(|term| lower.contains(&term.to_lowercase()))
        .take(MAX_KEYWORDS)
        .map(|term| term.to_string())
        .collect()
}

/// Trim, capitalize, and terminate a bullet with a period when it has no
/// sentence punctuation.
pub fn normalize_bullet(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut normalized = capitalize_first(trimmed);
    if !normalized.ends_with(['.', '!', '?']) {
        normalized.push('.');
    }
    normalized
}

/// Synthesize up to `max_bullets` bullets from paragraph text.
///
/// Whole sentences are preferred; when there are too few, clause fragments
/// split on `;` and `,` fill the remainder.
pub fn bullets_from_text(text: &str, max_bullets: usize) -> Vec<String> {
    if text.is_empty() || max_bullets == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<String> = SENTENCE_REGEX
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| SYNTHESIZED_BULLET_CHARS.contains(&s.chars().count()))
        .take(max_bullets)
        .map(str::to_string)
        .collect();

    if candidates.len() < max_bullets {
        let missing = max_bullets - candidates.len();
        candidates.extend(
            CLAUSE_SPLIT_REGEX
                .split(text)
                .map(str::trim)
                .filter(|s| SYNTHESIZED_BULLET_CHARS.contains(&s.chars().count()))
                .take(missing)
                .map(str::to_string),
        );
    }

    candidates.iter().map(|s| normalize_bullet(s)).collect()
}

/// Turn a question-style heading into a slide title.
///
/// "What is/are", "Why" and "How" prefixes and trailing question marks are
/// removed and the first letter is capitalized.
pub fn clean_section_title(title: &str) -> String {
    let stripped = HEADING_PREFIX_REGEX.replace(title.trim(), "");
    let stripped = TRAILING_QUESTION_REGEX.replace(&stripped, "");
    let cleaned = stripped.trim();

    if cleaned.is_empty() {
        return "Key Information".to_string();
    }
    capitalize_first(cleaned)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArticleBullet, BlockKind};

    fn section(heading: Option<&str>, content: &str, bullets: &[&str]) -> Section {
        Section {
            heading: heading.map(str::to_string),
            content: Some(content.to_string()),
            bullets: bullets.iter().map(|b| ArticleBullet::new(*b)).collect(),
        }
    }

    #[test]
    fn test_clean_section_title() {
        assert_eq!(clean_section_title("Why X matters?"), "X matters");
        assert_eq!(clean_section_title("What is the GST Council?"), "The GST Council");
        assert_eq!(clean_section_title("what are tariffs"), "Tariffs");
        assert_eq!(clean_section_title("How it works ??"), "It works");
        assert_eq!(clean_section_title("Background"), "Background");
        assert_eq!(clean_section_title("?"), "Key Information");
    }

    #[test]
    fn test_normalize_bullet() {
        assert_eq!(normalize_bullet("  tax reform  "), "Tax reform.");
        assert_eq!(normalize_bullet("Is it working?"), "Is it working?");
        assert_eq!(normalize_bullet("wow!"), "Wow!");
        assert_eq!(normalize_bullet("   "), "");
    }

    #[test]
    fn test_extract_keywords_caps_and_dedupes() {
        let text = "The Government of India passed a Bill in Parliament; the Supreme Court, \
                    the Minister, the President and the State commission reviewed the policy.";
        let keywords = extract_keywords(text);
        assert_eq!(keywords.len(), 7);
        assert_eq!(keywords[0], "India");
        assert!(keywords.contains(&"Government".to_string()));
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("nothing relevant here").is_empty());
    }

    #[test]
    fn test_bullets_from_text_prefers_sentences() {
        let text = "The first sentence is long enough to keep. Short one. \
                    Another sentence that clearly qualifies here!";
        let bullets = bullets_from_text(text, 6);
        assert_eq!(bullets[0], "The first sentence is long enough to keep.");
        assert_eq!(bullets[1], "Another sentence that clearly qualifies here!");
    }

    #[test]
    fn test_bullets_from_text_falls_back_to_clauses() {
        let text = "a clause that is long enough to count, another clause that is long enough too";
        let bullets = bullets_from_text(text, 3);
        assert_eq!(
            bullets,
            vec![
                "A clause that is long enough to count.",
                "Another clause that is long enough too."
            ]
        );
    }

    #[test]
    fn test_heading_with_bullets_only() {
        let article = Article {
            title: None,
            intro: Some(String::new()),
            sections: vec![section(
                Some("Why X matters?"),
                "",
                &[
                    "first bullet has thirty chars.",
                    "second bullet has thirty chars",
                    "third bullet is thirty chars!!",
                ],
            )],
        };

        let slides = extract_slides_from_article(&article);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].title, "X matters");
        assert_eq!(slides[0].blocks.len(), 3);
        assert!(slides[0].blocks.iter().all(|b| b.kind == BlockKind::Bullet));
        assert_eq!(slides[0].blocks[1].text, "Second bullet has thirty chars.");
    }

    #[test]
    fn test_rich_sections_synthesize_bullets() {
        let intro = "Parliament approved a framework for river management that changes how \
                     states share water resources.";
        let content = "The new framework creates a national authority for river basins. \
                       It requires states to publish annual water accounts. \
                       Disputes will move to a standing tribunal instead of ad hoc panels. \
                       Funding is tied to measurable conservation outcomes. \
                       Critics worry about central overreach into a state subject!";
        let article = Article {
            title: Some("Water".to_string()),
            intro: Some(intro.to_string()),
            sections: vec![
                section(Some("What is the framework?"), content, &[]),
                section(None, content, &[]),
            ],
        };

        let slides = extract_slides_from_article(&article);
        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].title, INTRO_SLIDE_TITLE);
        assert_eq!(slides[0].blocks, vec![ContentBlock::paragraph(intro)]);
        assert!(slides[0].keywords.contains(&"Parliament".to_string()));

        assert_eq!(slides[1].title, "The framework");
        assert_eq!(slides[2].title, "Key Point 2");
        for slide in &slides[1..] {
            assert_eq!(slide.blocks[0].kind, BlockKind::Paragraph);
            let bullets = slide.blocks.iter().filter(|b| b.kind == BlockKind::Bullet).count();
            assert!((1..=6).contains(&bullets));
        }
    }

    #[test]
    fn test_synthesized_bullets_fill_the_budget() {
        let content = "Rivers are shared between several states. \
                       The authority publishes yearly water accounts. \
                       Disputes go to a standing tribunal. \
                       Funding follows conservation outcomes. \
                       States keep control of local irrigation.";
        let article = Article {
            sections: vec![section(
                Some("Rivers"),
                content,
                &["Rivers are shared between several states."],
            )],
            ..Article::default()
        };

        let slides = extract_slides_from_article(&article);
        let bullets: Vec<&str> = slides[0]
            .blocks
            .iter()
            .filter(|b| b.kind == BlockKind::Bullet)
            .map(|b| b.text.as_str())
            .collect();
        assert_eq!(bullets.len(), 6);
        assert_eq!(bullets[0], "Rivers are shared between several states.");
        assert_eq!(bullets[5], "States keep control of local irrigation.");
    }

    #[test]
    fn test_scraped_bullets_are_filtered_and_capped() {
        let bullets: Vec<String> = (0..9).map(|i| format!("bullet number {} is long", i)).collect();
        let mut refs: Vec<&str> = bullets.iter().map(String::as_str).collect();
        refs.insert(0, "too short");
        let article = Article {
            sections: vec![section(Some("Points"), "", &refs)],
            ..Article::default()
        };

        let slides = extract_slides_from_article(&article);
        assert_eq!(slides[0].blocks.len(), 6);
        assert_eq!(slides[0].blocks[0].text, "Bullet number 0 is long.");
    }

    #[test]
    fn test_empty_section_is_skipped() {
        let article = Article {
            sections: vec![section(Some("Nothing"), "tiny", &[])],
            ..Article::default()
        };
        assert!(extract_slides_from_article(&article).is_empty());
    }
}
