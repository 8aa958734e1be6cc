//! Turns a presentation request into a finished `.pptx` file.

use chrono::{Local, NaiveDate};
use deck_core::canvas::Frame;
use deck_core::estimate::HeightEstimator;
use deck_core::layout::LayoutEngine;
use deck_core::slide::{Align, Anchor, PhysicalSlide, SlideKind, TextBox, TextStyle};
use deck_core::template::{FAINT_COLOR, MUTED_COLOR};
use deck_core::{CharCountEstimator, Error, PresentationRequest, QrRenderer, Result};

use crate::writer::PptxWriter;

/// Builds the cover slide, lays out content and serializes the deck.
#[derive(Debug, Clone)]
pub struct PresentationAssembler<E = CharCountEstimator> {
    engine: LayoutEngine<E>,
    date: Option<NaiveDate>,
}

impl PresentationAssembler {
    /// Create an assembler with the default layout engine.
    pub fn new() -> Self {
        Self {
            engine: LayoutEngine::new(),
            date: None,
        }
    }
}

impl Default for PresentationAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: HeightEstimator> PresentationAssembler<E> {
    /// Use a specific layout engine.
    pub fn with_engine<F: HeightEstimator>(self, engine: LayoutEngine<F>) -> PresentationAssembler<F> {
        PresentationAssembler {
            engine,
            date: self.date,
        }
    }

    /// Fix the date shown on the cover slide.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Produce the physical slides of the deck, cover first.
    pub fn build_slides(
        &self,
        request: &PresentationRequest,
        qr: &dyn QrRenderer,
    ) -> Result<Vec<PhysicalSlide>> {
        if request.slides.is_empty() {
            return Err(Error::EmptyDeck);
        }

        let mut slides = Vec::with_capacity(request.slides.len() + 1);
        slides.push(self.cover_slide(request));
        slides.extend(self.engine.layout(&request.slides, qr));

        let continuations = slides.iter().filter(|s| s.is_continuation()).count();
        let fallbacks = slides
            .iter()
            .filter(|s| s.kind == SlideKind::Fallback)
            .count();
        log::info!(
            "Laid out {} logical slides onto {} pages ({} continuations, {} fallbacks)",
            request.slides.len(),
            slides.len(),
            continuations,
            fallbacks
        );
        Ok(slides)
    }

    /// Assemble the request into the bytes of a `.pptx` file.
    pub fn assemble(&self, request: &PresentationRequest, qr: &dyn QrRenderer) -> Result<Vec<u8>> {
        let slides = self.build_slides(request, qr)?;

        let writer = PptxWriter::new(request.template).with_title(&request.title);
        let writer = match self.date.and_then(|d| d.and_hms_opt(0, 0, 0)) {
            Some(created) => writer.with_created(created),
            None => writer,
        };

        let bytes = writer.write(&slides)?;
        if bytes.is_empty() {
            return Err(Error::SerializationError(
                "writer produced an empty file".to_string(),
            ));
        }
        Ok(bytes)
    }

    fn cover_slide(&self, request: &PresentationRequest) -> PhysicalSlide {
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());
        let mut cover = PhysicalSlide::new(SlideKind::Cover, None);

        cover.push_text(TextBox::plain(
            Frame::new(1.0, 1.8, 8.0, 1.2),
            &request.title,
            TextStyle::title(40.0)
                .with_align(Align::Center)
                .with_anchor(Anchor::Middle),
        ));

        if let Some(subtitle) = request.subtitle.as_deref().filter(|s| !s.trim().is_empty()) {
            cover.push_text(TextBox::plain(
                Frame::new(1.0, 3.2, 8.0, 0.8),
                subtitle,
                TextStyle::body(24.0)
                    .with_color(MUTED_COLOR)
                    .with_align(Align::Center)
                    .with_anchor(Anchor::Middle),
            ));
        }

        cover.push_text(TextBox::plain(
            Frame::new(1.0, 4.2, 8.0, 0.5),
            date.format("%B %-d, %Y").to_string(),
            TextStyle::body(16.0)
                .with_color(FAINT_COLOR)
                .with_align(Align::Center),
        ));

        cover
    }
}
