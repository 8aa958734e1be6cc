//! Dynamic layout of logical slides onto physical slides.
//!
//! A vertical cursor tracks the next free position inside the content
//! region. Blocks that do not fit below the cursor move to a continuation
//! slide; long paragraphs are split into chunks first. Bullets are never
//! split. A logical slide that cannot be laid out is replaced by a single
//! fallback slide, and the rest of the deck carries on.

use crate::canvas::{
    Frame, CONTENT_END_Y, CONTENT_HEIGHT, CONTENT_START_Y, CONTENT_WIDTH, MARGIN, SLIDE_WIDTH,
    TITLE_HEIGHT, TITLE_Y,
};
use crate::emphasis::KeywordMatcher;
use crate::error::{Error, Result};
use crate::estimate::{chunk_chars_per_line, split_text, CharCountEstimator, HeightEstimator};
use crate::qr::{ImageFormat, QrRenderer};
use crate::slide::{Align, ImageBox, PhysicalSlide, Placement, SlideKind, TextBox, TextStyle};
use crate::types::{BlockKind, ContentBlock, LogicalSlide};

/// Marker shown on overflow pages.
pub const CONTINUED_MARKER: &str = "(continued)";

/// Body text of a fallback slide.
pub const FALLBACK_NOTICE: &str = "Content could not be displayed properly.";

/// Narrowest text box a nested bullet may be given.
const MIN_TEXT_WIDTH: f64 = 1.0;

/// Smallest chunk budget tried when a paragraph chunk is still too tall.
const MIN_CHUNK_CHARS: usize = 40;

/// Tunable sizes and spacing used by the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Paragraph font size in points.
    pub paragraph_font_size: f64,
    /// Bullet font size in points.
    pub bullet_font_size: f64,
    pub title_font_size: f64,
    /// Maximum lines in one paragraph chunk.
    pub paragraph_max_lines: usize,
    /// Gap added below every placed box.
    pub line_spacing: f64,
    /// Minimum height reserved for any text box.
    pub min_block_height: f64,
    /// Horizontal indent per bullet nesting level.
    pub bullet_indent: f64,
    /// Side length of a rendered QR code.
    pub qr_size: f64,
    /// Extra room required below a QR code before placing it.
    pub qr_padding: f64,
    /// Gap added below a QR code.
    pub qr_gap: f64,
    /// Titles longer than this are shortened with an ellipsis.
    pub max_title_chars: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            paragraph_font_size: 16.0,
            bullet_font_size: 14.0,
            title_font_size: 24.0,
            paragraph_max_lines: 8,
            line_spacing: 0.1,
            min_block_height: 0.3,
            bullet_indent: 0.2,
            qr_size: 2.0,
            qr_padding: 0.5,
            qr_gap: 0.2,
            max_title_chars: 80,
        }
    }
}

/// Lays out logical slides with a pluggable height estimator.
#[derive(Debug, Clone)]
pub struct LayoutEngine<E = CharCountEstimator> {
    config: LayoutConfig,
    estimator: E,
}

impl LayoutEngine {
    /// Create an engine with the default estimator and configuration.
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
            estimator: CharCountEstimator::default(),
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: HeightEstimator> LayoutEngine<E> {
    /// Replace the height estimator.
    pub fn with_estimator<F: HeightEstimator>(self, estimator: F) -> LayoutEngine<F> {
        LayoutEngine {
            config: self.config,
            estimator,
        }
    }

    /// Replace the layout configuration.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out logical slides in order.
    ///
    /// Every logical slide produces at least one physical slide. Only the
    /// first page carries the title; overflow pages start directly with
    /// content under a continuation marker.
    pub fn layout(&self, slides: &[LogicalSlide], qr: &dyn QrRenderer) -> Vec<PhysicalSlide> {
        let mut session = LayoutSession::new(self, qr);
        for (index, slide) in slides.iter().enumerate() {
            session.add_logical_slide(index, slide);
        }
        session.finish()
    }

    /// Split paragraph text into chunks whose estimated height fits one slide.
    pub fn paragraph_chunks(&self, text: &str, font_size: f64, width: f64) -> Vec<String> {
        let mut budget = self.config.paragraph_max_lines.max(1) * chunk_chars_per_line(font_size);
        loop {
            let chunks = split_text(text, budget);
            let fits = chunks
                .iter()
                .all(|c| self.estimator.estimate(c, font_size, width) <= CONTENT_HEIGHT);
            if fits || budget <= MIN_CHUNK_CHARS {
                return chunks;
            }
            budget /= 2;
        }
    }

    fn block_height(&self, text: &str, font_size: f64, width: f64) -> f64 {
        self.estimator
            .estimate(text, font_size, width)
            .max(self.config.min_block_height)
    }

    fn display_title(&self, title: &str) -> String {
        let max = self.config.max_title_chars;
        if title.chars().count() > max {
            let kept: String = title.chars().take(max.saturating_sub(3)).collect();
            format!("{}...", kept)
        } else {
            title.to_string()
        }
    }
}

/// Mutable state for one layout run: the pages produced so far and the cursor.
struct LayoutSession<'a, E> {
    engine: &'a LayoutEngine<E>,
    qr: &'a dyn QrRenderer,
    slides: Vec<PhysicalSlide>,
    cursor_y: f64,
}

impl<'a, E: HeightEstimator> LayoutSession<'a, E> {
    fn new(engine: &'a LayoutEngine<E>, qr: &'a dyn QrRenderer) -> Self {
        Self {
            engine,
            qr,
            slides: Vec::new(),
            cursor_y: CONTENT_START_Y,
        }
    }

    fn config(&self) -> &LayoutConfig {
        &self.engine.config
    }

    fn add_logical_slide(&mut self, index: usize, slide: &LogicalSlide) {
        let checkpoint = self.slides.len();
        if let Err(e) = self.lay_out(index, slide) {
            log::warn!(
                "Failed to lay out slide {} ({:?}), inserting fallback: {}",
                index + 1,
                slide.title,
                e
            );
            let fallback = self.fallback_slide(index, &slide.title);
            self.slides.truncate(checkpoint);
            self.slides.push(fallback);
            self.cursor_y = CONTENT_START_Y;
        }
    }

    fn finish(self) -> Vec<PhysicalSlide> {
        self.slides
    }

    fn lay_out(&mut self, index: usize, slide: &LogicalSlide) -> Result<()> {
        let emphasis = KeywordMatcher::new(&slide.keywords);
        let title = self.engine.display_title(&slide.title);

        self.start_page(index, &title);

        let skipped = slide.blocks.len() - slide.visible_blocks().count();
        if skipped > 0 {
            log::debug!("Skipping {} blank block(s) on slide {}", skipped, index + 1);
        }

        for (block_index, block) in slide.visible_blocks() {
            match block.kind {
                BlockKind::Paragraph => self.place_paragraph(index, block_index, block, &emphasis)?,
                BlockKind::Bullet => self.place_bullet(index, block_index, block, &emphasis)?,
                BlockKind::QrCode => self.place_qr(index, block_index, &block.text)?,
            }
        }

        Ok(())
    }

    /// First page of a logical slide: the title band and a fresh cursor.
    fn start_page(&mut self, index: usize, title: &str) {
        let mut page = PhysicalSlide::new(SlideKind::Content, Some(index));
        page.push_text(TextBox::plain(
            Frame::new(MARGIN, TITLE_Y, CONTENT_WIDTH, TITLE_HEIGHT),
            title,
            TextStyle::title(self.config().title_font_size),
        ));
        self.slides.push(page);
        self.cursor_y = CONTENT_START_Y;
    }

    /// Overflow page: no title, only the marker in the top-right corner.
    fn start_continuation(&mut self, index: usize) {
        let mut page = PhysicalSlide::new(SlideKind::Continuation, Some(index));
        page.push_text(TextBox::plain(
            Frame::new(SLIDE_WIDTH - MARGIN - 1.5, TITLE_Y, 1.5, 0.3),
            CONTINUED_MARKER,
            TextStyle::muted(12.0).italic().with_align(Align::Right),
        ));
        self.slides.push(page);
        self.cursor_y = CONTENT_START_Y;
    }

    fn remaining_height(&self) -> f64 {
        (CONTENT_END_Y - self.cursor_y).max(0.0)
    }

    /// Move to a continuation page unless the block fits or the page is still empty.
    fn ensure_room(&mut self, index: usize, height: f64) {
        if height > self.remaining_height() && self.cursor_y > CONTENT_START_Y {
            log::debug!(
                "Block of {:.2}in does not fit at y={:.2}, continuing slide {}",
                height,
                self.cursor_y,
                index + 1
            );
            self.start_continuation(index);
        }
    }

    fn current_page(&mut self) -> Result<&mut PhysicalSlide> {
        self.slides.last_mut().ok_or_else(|| {
            Error::InvalidBlock("content placed before a slide was started".to_string())
        })
    }

    fn place_text(&mut self, block: usize, text: TextBox) -> Result<()> {
        let top = self.cursor_y;
        let height = text.frame.h;
        let spacing = self.config().line_spacing;

        let page = self.current_page()?;
        page.push_text(text);
        page.placements.push(Placement { block, top, height });

        self.cursor_y += height + spacing;
        Ok(())
    }

    fn place_paragraph(
        &mut self,
        index: usize,
        block_index: usize,
        block: &ContentBlock,
        emphasis: &KeywordMatcher,
    ) -> Result<()> {
        let font_size = self.config().paragraph_font_size;
        let width = self.text_width(block.level)?;

        for chunk in self.engine.paragraph_chunks(&block.text, font_size, width) {
            let height = self.engine.block_height(&chunk, font_size, width);
            self.ensure_room(index, height);

            let text = TextBox {
                frame: Frame::new(MARGIN, self.cursor_y, width, height),
                runs: emphasis.runs(&chunk),
                style: TextStyle::body(font_size),
            };
            self.place_text(block_index, text)?;
        }

        self.cursor_y += self.config().line_spacing;
        Ok(())
    }

    fn place_bullet(
        &mut self,
        index: usize,
        block_index: usize,
        block: &ContentBlock,
        emphasis: &KeywordMatcher,
    ) -> Result<()> {
        let font_size = self.config().bullet_font_size;
        let width = self.text_width(block.level)?;
        let indent = CONTENT_WIDTH - width;
        let height = self.engine.block_height(&block.text, font_size, width);

        if height > CONTENT_HEIGHT {
            log::warn!(
                "Bullet on slide {} is taller than a slide ({:.2}in) and will overflow",
                index + 1,
                height
            );
        }
        self.ensure_room(index, height);

        let text = TextBox {
            frame: Frame::new(MARGIN + indent, self.cursor_y, width, height),
            runs: emphasis.runs(&block.text),
            style: TextStyle::body(font_size).with_bullet(block.level),
        };
        self.place_text(block_index, text)
    }

    fn place_qr(&mut self, index: usize, block_index: usize, url: &str) -> Result<()> {
        let config = self.config().clone();
        let url = url.trim();

        self.ensure_room(index, config.qr_size + config.qr_padding);
        let top = self.cursor_y;

        match self.render_qr(url) {
            Ok((data, format)) => {
                let image = ImageBox {
                    frame: Frame::new(
                        (SLIDE_WIDTH - config.qr_size) / 2.0,
                        top,
                        config.qr_size,
                        config.qr_size,
                    ),
                    data,
                    format,
                    description: format!("QR code for {}", url),
                };
                let page = self.current_page()?;
                page.push_image(image);
                page.placements.push(Placement {
                    block: block_index,
                    top,
                    height: config.qr_size,
                });
                self.cursor_y += config.qr_size + config.qr_gap;
            }
            Err(e) => {
                log::warn!("QR code for {} unavailable, showing the link as text: {}", url, e);
                let text = TextBox::plain(
                    Frame::new(MARGIN, top, CONTENT_WIDTH, 0.4),
                    format!("Quiz URL: {}", url),
                    TextStyle::muted(12.0).with_align(Align::Center),
                );
                let page = self.current_page()?;
                page.push_text(text);
                page.placements.push(Placement {
                    block: block_index,
                    top,
                    height: 0.4,
                });
                self.cursor_y += 0.6;
            }
        }

        Ok(())
    }

    fn render_qr(&self, url: &str) -> Result<(Vec<u8>, ImageFormat)> {
        let data = self.qr.render(url)?;
        let format = ImageFormat::sniff(&data)
            .ok_or_else(|| Error::QrError("renderer returned unrecognized image data".to_string()))?;
        Ok((data, format))
    }

    fn text_width(&self, level: u32) -> Result<f64> {
        let width = CONTENT_WIDTH - level as f64 * self.config().bullet_indent;
        if width < MIN_TEXT_WIDTH {
            return Err(Error::InvalidBlock(format!(
                "nesting level {} leaves no room for text",
                level
            )));
        }
        Ok(width)
    }

    fn fallback_slide(&self, index: usize, title: &str) -> PhysicalSlide {
        let mut page = PhysicalSlide::new(SlideKind::Fallback, Some(index));
        page.push_text(TextBox::plain(
            Frame::new(MARGIN, 0.3, CONTENT_WIDTH, TITLE_HEIGHT),
            self.engine.display_title(title),
            TextStyle::title(28.0),
        ));
        page.push_text(TextBox::plain(
            Frame::new(MARGIN, CONTENT_START_Y, CONTENT_WIDTH, 1.0),
            FALLBACK_NOTICE,
            TextStyle::muted(16.0),
        ));
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::OfflineQrRenderer;
    use crate::slide::Element;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\nfakeimagedata";

    struct StubQr;

    impl QrRenderer for StubQr {
        fn render(&self, _url: &str) -> Result<Vec<u8>> {
            Ok(PNG.to_vec())
        }
    }

    /// Every block is a fixed height regardless of text.
    struct FixedEstimator(f64);

    impl HeightEstimator for FixedEstimator {
        fn estimate(&self, _text: &str, _font_size: f64, _width: f64) -> f64 {
            self.0
        }
    }

    /// Titles of the pages that carry one; continuation pages have none.
    fn titles(slides: &[PhysicalSlide]) -> Vec<String> {
        slides
            .iter()
            .filter(|s| !s.is_continuation())
            .map(|s| s.texts()[0].clone())
            .collect()
    }

    fn lorem(words: usize) -> String {
        (0..words)
            .map(|i| format!("word{}", i % 10))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_short_slide_fits_on_one_page() {
        let slide = LogicalSlide::new("Budget")
            .with_block(ContentBlock::paragraph("A short paragraph."))
            .with_block(ContentBlock::bullet("One point."));
        let slides = LayoutEngine::new().layout(&[slide], &OfflineQrRenderer);

        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].kind, SlideKind::Content);
        assert_eq!(slides[0].texts(), vec!["Budget", "A short paragraph.", "One point."]);
        assert_eq!(slides[0].block_indices(), vec![0, 1]);
    }

    #[test]
    fn test_bullets_overflow_to_continuation() {
        // Six bullets of 1.0in each: four fit in the 4.325in region.
        let slide = LogicalSlide::new("Overflow")
            .with_blocks((0..6).map(|i| ContentBlock::bullet(format!("Bullet {}", i))));
        let engine = LayoutEngine::new().with_estimator(FixedEstimator(1.0));
        let slides = engine.layout(&[slide], &OfflineQrRenderer);

        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].block_indices(), vec![0, 1, 2, 3]);
        assert_eq!(slides[1].block_indices(), vec![4, 5]);
        assert!(slides[1].is_continuation());
        assert_eq!(slides[1].texts()[0], CONTINUED_MARKER);
        assert!(!slides[1].texts().contains(&"Overflow".to_string()));
        assert_eq!(titles(&slides), vec!["Overflow"]);
    }

    #[test]
    fn test_every_block_appears_once_in_order() {
        let blocks: Vec<ContentBlock> = (0..12)
            .map(|i| {
                if i % 3 == 0 {
                    ContentBlock::paragraph(lorem(40 + i * 10))
                } else {
                    ContentBlock::bullet(lorem(10 + i))
                }
            })
            .collect();
        let slide = LogicalSlide::new("Many").with_blocks(blocks);
        let slides = LayoutEngine::new().layout(&[slide], &OfflineQrRenderer);

        let mut seen: Vec<usize> = slides.iter().flat_map(|s| s.block_indices()).collect();
        seen.dedup();
        assert_eq!(seen, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_cursor_stays_inside_content_region() {
        let blocks: Vec<ContentBlock> = (0..20)
            .map(|i| ContentBlock::bullet(lorem(15 + (i * 7) % 30)))
            .collect();
        let slide = LogicalSlide::new("Bounds").with_blocks(blocks);
        let slides = LayoutEngine::new().layout(&[slide], &OfflineQrRenderer);

        assert!(slides.len() > 1);
        for slide in &slides {
            let mut previous = CONTENT_START_Y;
            for placement in &slide.placements {
                assert!(placement.top >= previous - 1e-9);
                assert!(placement.top + placement.height <= CONTENT_END_Y + 1e-9);
                previous = placement.top;
            }
        }
    }

    #[test]
    fn test_long_paragraph_without_spaces_is_split() {
        let text = "x".repeat(4000);
        let slide = LogicalSlide::new("Intro").with_block(ContentBlock::paragraph(text.clone()));
        let slides = LayoutEngine::new().layout(&[slide], &OfflineQrRenderer);

        assert!(slides.len() >= 2);
        assert_eq!(slides[0].texts()[0], "Intro");
        let mut rebuilt = String::new();
        for (i, slide) in slides.iter().enumerate() {
            assert_eq!(slide.is_continuation(), i > 0);
            for placement in &slide.placements {
                assert!(placement.height <= CONTENT_HEIGHT);
                assert!(placement.top + placement.height <= CONTENT_END_Y + 1e-9);
            }
            // Title on the first page, marker on the rest.
            let texts = slide.texts();
            assert_eq!(texts[0], if i == 0 { "Intro" } else { CONTINUED_MARKER });
            for chunk in texts.iter().skip(1) {
                rebuilt.push_str(chunk);
            }
        }
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_long_paragraph_with_sentences_breaks_at_punctuation() {
        let sentence = "The committee recommended sweeping changes to the allocation formula. ";
        let text = sentence.repeat(40);
        let slide = LogicalSlide::new("Report").with_block(ContentBlock::paragraph(text));
        let slides = LayoutEngine::new().layout(&[slide], &OfflineQrRenderer);

        assert!(slides.len() >= 2);
        for slide in &slides {
            for chunk in slide.texts().iter().skip(1) {
                assert!(chunk.ends_with('.'), "chunk should end a sentence: {:?}", chunk);
            }
        }
    }

    #[test]
    fn test_oversized_bullet_gets_its_own_page() {
        let slide = LogicalSlide::new("Big")
            .with_block(ContentBlock::bullet("small"))
            .with_block(ContentBlock::bullet("huge"))
            .with_block(ContentBlock::bullet("after"));

        struct ByText;
        impl HeightEstimator for ByText {
            fn estimate(&self, text: &str, _font_size: f64, _width: f64) -> f64 {
                if text == "huge" {
                    6.0
                } else {
                    0.5
                }
            }
        }

        let slides = LayoutEngine::new()
            .with_estimator(ByText)
            .layout(&[slide], &OfflineQrRenderer);

        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].block_indices(), vec![0]);
        assert_eq!(slides[1].block_indices(), vec![1]);
        assert_eq!(slides[2].block_indices(), vec![2]);
    }

    #[test]
    fn test_first_block_is_never_pushed_off_title_page() {
        let slide = LogicalSlide::new("Tall").with_block(ContentBlock::bullet("tall"));
        let slides = LayoutEngine::new()
            .with_estimator(FixedEstimator(10.0))
            .layout(&[slide], &OfflineQrRenderer);

        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].block_indices(), vec![0]);
    }

    #[test]
    fn test_qr_on_full_page_moves_to_continuation() {
        let slide = LogicalSlide::new("Quiz")
            .with_blocks((0..3).map(|i| ContentBlock::bullet(format!("Point {}", i))))
            .with_block(ContentBlock::qr_code("https://quiz.example/42"));
        let slides = LayoutEngine::new()
            .with_estimator(FixedEstimator(0.8))
            .layout(&[slide], &StubQr);

        assert_eq!(slides.len(), 2);
        assert!(slides[1].is_continuation());
        let images: Vec<&ImageBox> = slides[1].images().collect();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].frame, Frame::new(4.0, CONTENT_START_Y, 2.0, 2.0));
        assert_eq!(images[0].format, ImageFormat::Png);
    }

    #[test]
    fn test_qr_failure_degrades_to_text() {
        let slide = LogicalSlide::new("Quiz").with_block(ContentBlock::qr_code("https://q.example"));
        let slides = LayoutEngine::new().layout(&[slide], &OfflineQrRenderer);

        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].images().count(), 0);
        assert_eq!(slides[0].texts()[1], "Quiz URL: https://q.example");
    }

    #[test]
    fn test_unrecognized_qr_bytes_degrade_to_text() {
        struct HtmlQr;
        impl QrRenderer for HtmlQr {
            fn render(&self, _url: &str) -> Result<Vec<u8>> {
                Ok(b"<html>rate limited</html>".to_vec())
            }
        }

        let slide = LogicalSlide::new("Quiz").with_block(ContentBlock::qr_code("https://q.example"));
        let slides = LayoutEngine::new().layout(&[slide], &HtmlQr);
        assert_eq!(slides[0].images().count(), 0);
    }

    #[test]
    fn test_failed_slide_becomes_single_fallback() {
        let good = LogicalSlide::new("Good").with_block(ContentBlock::bullet("fine"));
        let bad = LogicalSlide::new("Bad")
            .with_blocks((0..8).map(|i| ContentBlock::bullet(format!("Point {}", i))))
            .with_block(ContentBlock::nested_bullet("too deep", 100));
        let slides = LayoutEngine::new()
            .with_estimator(FixedEstimator(1.0))
            .layout(&[good.clone(), bad, good], &OfflineQrRenderer);

        assert_eq!(slides.len(), 3);
        assert_eq!(titles(&slides), vec!["Good", "Bad", "Good"]);
        assert_eq!(slides[1].kind, SlideKind::Fallback);
        assert_eq!(slides[1].source, Some(1));
        assert_eq!(slides[1].texts()[1], FALLBACK_NOTICE);
        assert_eq!(slides[2].kind, SlideKind::Content);
    }

    #[test]
    fn test_blank_blocks_are_dropped() {
        let slide = LogicalSlide::new("Sparse")
            .with_block(ContentBlock::bullet("   "))
            .with_block(ContentBlock::paragraph(""))
            .with_block(ContentBlock::bullet("Real"));
        let slides = LayoutEngine::new().layout(&[slide], &OfflineQrRenderer);

        assert_eq!(slides[0].texts(), vec!["Sparse", "Real"]);
        assert_eq!(slides[0].block_indices(), vec![2]);
    }

    #[test]
    fn test_slide_without_blocks_still_gets_a_page() {
        let slides = LayoutEngine::new().layout(&[LogicalSlide::new("Empty")], &OfflineQrRenderer);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].texts(), vec!["Empty"]);
    }

    #[test]
    fn test_long_title_is_shortened() {
        let title = "T".repeat(95);
        let slides = LayoutEngine::new().layout(&[LogicalSlide::new(title)], &OfflineQrRenderer);
        let shown = &slides[0].texts()[0];

        assert_eq!(shown.chars().count(), 80);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_keywords_are_emphasized() {
        let slide = LogicalSlide::new("GST")
            .with_block(ContentBlock::bullet("The GST council met."))
            .with_keywords(["gst"]);
        let slides = LayoutEngine::new().layout(&[slide], &OfflineQrRenderer);

        let Element::Text(bullet) = &slides[0].elements[1] else {
            panic!("expected a text box");
        };
        assert_eq!(bullet.style.bullet, Some(0));
        assert!(bullet.runs.iter().any(|r| r.emphasis && r.text == "GST"));
    }

    #[test]
    fn test_emphasis_does_not_change_pagination() {
        let blocks: Vec<ContentBlock> = (0..15).map(|i| ContentBlock::bullet(lorem(20 + i))).collect();
        let plain = LogicalSlide::new("P").with_blocks(blocks.clone());
        let emphasized = LogicalSlide::new("P")
            .with_blocks(blocks)
            .with_keywords(["word1", "word3", "word7"]);

        let engine = LayoutEngine::new();
        let a = engine.layout(&[plain], &OfflineQrRenderer);
        let b = engine.layout(&[emphasized], &OfflineQrRenderer);

        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.placements, y.placements);
        }
    }

    #[test]
    fn test_nested_bullets_are_indented() {
        let slide = LogicalSlide::new("Nested")
            .with_block(ContentBlock::bullet("Parent"))
            .with_block(ContentBlock::nested_bullet("Child", 2));
        let slides = LayoutEngine::new().layout(&[slide], &OfflineQrRenderer);

        let Element::Text(child) = &slides[0].elements[2] else {
            panic!("expected a text box");
        };
        assert!((child.frame.x - (MARGIN + 0.4)).abs() < 1e-9);
        assert!((child.frame.w - (CONTENT_WIDTH - 0.4)).abs() < 1e-9);
    }
}
