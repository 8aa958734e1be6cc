//! Text height estimation and paragraph chunking.
//!
//! Heights are approximations from character counts, not real text shaping.
//! Pagination only relies on estimators being monotonic: longer text at the
//! same width and font never estimates shorter.

use crate::canvas::POINTS_PER_INCH;

/// Break points tried, in order of preference, when splitting a paragraph.
const NATURAL_BREAKS: &[&str] = &["\n\n", ". ", "? ", "! ", "; ", ", ", " "];

/// A break point must lie past this fraction of the chunk budget.
const MIN_BREAK_FRACTION: f64 = 0.6;

/// Estimates the rendered height of text.
pub trait HeightEstimator {
    /// Height in inches of `text` at `font_size` points in a box `width` inches wide.
    fn estimate(&self, text: &str, font_size: f64, width: f64) -> f64;
}

impl<E: HeightEstimator + ?Sized> HeightEstimator for &E {
    fn estimate(&self, text: &str, font_size: f64, width: f64) -> f64 {
        (**self).estimate(text, font_size, width)
    }
}

/// Estimates height from character count, box width and font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharCountEstimator {
    /// Average characters per em of box width.
    pub width_factor: f64,
    /// Line height as a multiple of the font size.
    pub line_spacing_factor: f64,
    /// Lower bound for any estimate, in inches.
    pub min_height: f64,
}

impl Default for CharCountEstimator {
    fn default() -> Self {
        Self {
            width_factor: 1.2,
            line_spacing_factor: 1.1,
            min_height: 0.25,
        }
    }
}

impl CharCountEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimated characters per line.
    pub fn chars_per_line(&self, font_size: f64, width: f64) -> usize {
        let per_line = (width * POINTS_PER_INCH / font_size * self.width_factor).floor();
        (per_line as usize).max(1)
    }
}

impl HeightEstimator for CharCountEstimator {
    fn estimate(&self, text: &str, font_size: f64, width: f64) -> f64 {
        let per_line = self.chars_per_line(font_size, width);
        let lines = text.chars().count().div_ceil(per_line);
        let height = lines as f64 * (font_size / POINTS_PER_INCH) * self.line_spacing_factor;
        height.max(self.min_height)
    }
}

/// Characters per line used to size paragraph chunks at a font size.
pub fn chunk_chars_per_line(font_size: f64) -> usize {
    if font_size >= 18.0 {
        65
    } else if font_size >= 16.0 {
        75
    } else {
        85
    }
}

/// Split text into chunks of at most roughly `max_chars` characters.
///
/// Each cut prefers a paragraph break, then sentence punctuation, then
/// clause punctuation, then a space, provided the break lies past 60% of
/// the budget. Otherwise the text is cut hard at `max_chars`.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let threshold = max_chars as f64 * MIN_BREAK_FRACTION;
    let mut chunks = Vec::new();
    let mut remaining = text.trim();

    while !remaining.is_empty() {
        let Some((limit, _)) = remaining.char_indices().nth(max_chars) else {
            chunks.push(remaining.to_string());
            break;
        };

        let split_at = NATURAL_BREAKS
            .iter()
            .find_map(|brk| {
                let pos = remaining
                    .match_indices(brk)
                    .map(|(i, _)| i)
                    .take_while(|&i| i <= limit)
                    .last()?;
                let chars_before = remaining[..pos].chars().count() as f64;
                (chars_before > threshold).then_some(pos + brk.len())
            })
            .unwrap_or(limit);

        let chunk = remaining[..split_at].trim();
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }
        remaining = remaining[split_at..].trim();
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_is_monotonic() {
        let estimator = CharCountEstimator::new();
        let mut previous = 0.0;
        for len in (0..2000).step_by(37) {
            let text = "x".repeat(len);
            let height = estimator.estimate(&text, 14.0, 9.0);
            assert!(height >= previous);
            previous = height;
        }
    }

    #[test]
    fn test_estimate_values() {
        let estimator = CharCountEstimator::new();
        assert_eq!(estimator.chars_per_line(16.0, 9.0), 48);
        assert_eq!(estimator.estimate("", 16.0, 9.0), 0.25);

        // 96 chars -> 2 lines of 16pt at 1.1 spacing
        let height = estimator.estimate(&"a".repeat(96), 16.0, 9.0);
        assert!((height - 2.0 * 16.0 / 72.0 * 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_split_short_text_is_single_chunk() {
        assert_eq!(split_text("  short text  ", 100), vec!["short text"]);
        assert!(split_text("   ", 100).is_empty());
    }

    #[test]
    fn test_split_prefers_sentence_end() {
        let text = "First sentence goes here. Second sentence, with a comma, goes on and on";
        let chunks = split_text(text, 30);
        assert_eq!(chunks[0], "First sentence goes here.");
        assert_eq!(chunks[1], "Second sentence, with a comma,");
        assert!(chunks.iter().all(|c| c.chars().count() <= 31));
        assert_eq!(chunks.join(" "), text);
    }

    #[test]
    fn test_split_ignores_early_breaks() {
        // The only period is before 60% of the budget, so a later space wins.
        let text = "Hi. aaaa bbbb cccc dddd eeee ffff gggg hhhh";
        let chunks = split_text(text, 20);
        assert_eq!(chunks[0], "Hi. aaaa bbbb cccc");
    }

    #[test]
    fn test_split_hard_cut_without_spaces() {
        let text = "x".repeat(250);
        let chunks = split_text(&text, 100);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 100);
        assert_eq!(chunks[2].len(), 50);
    }

    #[test]
    fn test_split_handles_multibyte_text() {
        let text = "é".repeat(30);
        let chunks = split_text(&text, 7);
        assert_eq!(chunks.len(), 5);
        assert!(chunks.iter().all(|c| c.chars().count() <= 7));
    }

    #[test]
    fn test_chunk_chars_per_line() {
        assert_eq!(chunk_chars_per_line(18.0), 65);
        assert_eq!(chunk_chars_per_line(16.0), 75);
        assert_eq!(chunk_chars_per_line(14.0), 85);
    }
}
