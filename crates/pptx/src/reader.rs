//! Reads generated `.pptx` files back for inspection.

use std::io::{Cursor, Read, Seek};

use deck_core::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use zip::ZipArchive;

use crate::xml::EMU_PER_INCH;

/// What a deck contains, slide by slide.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeckSummary {
    /// Slide width in inches.
    pub width: f64,
    /// Slide height in inches.
    pub height: f64,
    /// Number of embedded media files.
    pub media: usize,
    pub slides: Vec<SlideSummary>,
}

impl DeckSummary {
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// Text and pictures found on one slide.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SlideSummary {
    /// Position in the deck, starting at 1.
    pub number: usize,
    /// Archive path of the slide part.
    pub path: String,
    /// Text of each shape in drawing order.
    pub texts: Vec<String>,
    /// Text of every bold run.
    pub bold: Vec<String>,
    pub pictures: usize,
    /// Rendered value of the slide-number field, if present.
    pub slide_number: Option<String>,
}

/// Reader for PPTX (Office Open XML) files.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeckReader;

impl DeckReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a deck held in memory.
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<DeckSummary> {
        self.read(Cursor::new(bytes))
    }

    /// Read a deck from any seekable source.
    pub fn read<R: Read + Seek>(&self, reader: R) -> Result<DeckSummary> {
        let mut archive =
            ZipArchive::new(reader).map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let mut summary = DeckSummary {
            media: archive
                .file_names()
                .filter(|name| name.starts_with("ppt/media/"))
                .count(),
            ..DeckSummary::default()
        };

        let presentation = read_file_from_archive(&mut archive, "ppt/presentation.xml")?;
        if let Some((cx, cy)) = slide_size(&presentation)? {
            summary.width = cx as f64 / EMU_PER_INCH;
            summary.height = cy as f64 / EMU_PER_INCH;
        }

        let slide_order = get_slide_order(&mut archive)?;
        for (idx, slide_path) in slide_order.iter().enumerate() {
            let content = read_file_from_archive(&mut archive, slide_path)?;
            let mut slide = parse_slide(&content)?;
            slide.number = idx + 1;
            slide.path = slide_path.clone();
            summary.slides.push(slide);
        }

        log::debug!("Read {} slides", summary.slides.len());
        Ok(summary)
    }
}

/// Ordered slide part paths from the presentation relationships.
fn get_slide_order<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
    let rels_content = read_file_from_archive(archive, "ppt/_rels/presentation.xml.rels")?;
    let mut slides: Vec<(String, Option<usize>)> = Vec::new();

    let mut reader = Reader::from_str(&rels_content);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if local_name(e.name().as_ref()) == b"Relationship" =>
            {
                let rel_type = attribute(e, b"Type").unwrap_or_default();
                let target = attribute(e, b"Target").unwrap_or_default();
                let id = attribute(e, b"Id").unwrap_or_default();

                if rel_type.ends_with("/slide") {
                    let order = extract_slide_number(&id).or_else(|| extract_slide_number(&target));
                    let full_path = match target.strip_prefix('/') {
                        Some(absolute) => absolute.to_string(),
                        None => format!("ppt/{}", target),
                    };
                    slides.push((full_path, order));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "Error parsing relationships: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    slides.sort_by(|a, b| match (a.1, b.1) {
        (Some(na), Some(nb)) => na.cmp(&nb),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.0.cmp(&b.0),
    });

    Ok(slides.into_iter().map(|(path, _)| path).collect())
}

/// Slide size in EMUs from `presentation.xml`.
fn slide_size(xml: &str) -> Result<Option<(i64, i64)>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if local_name(e.name().as_ref()) == b"sldSz" =>
            {
                let cx = attribute(e, b"cx").and_then(|v| v.parse().ok());
                let cy = attribute(e, b"cy").and_then(|v| v.parse().ok());
                return Ok(cx.zip(cy));
            }
            Ok(Event::Eof) => return Ok(None),
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "Error parsing presentation: {}",
                    e
                )))
            }
            _ => {}
        }
    }
}

/// Collects shape text, bold runs, pictures and the slide number of one slide.
fn parse_slide(xml: &str) -> Result<SlideSummary> {
    let mut slide = SlideSummary::default();
    // Run text keeps its spaces; only text inside <a:t> is collected.
    let mut reader = Reader::from_str(xml);

    let mut shape_text: Option<String> = None;
    let mut paragraphs = 0;
    let mut in_text = false;
    let mut in_field = false;
    let mut field_text = String::new();
    let mut run_bold = false;
    let mut run_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"sp" => {
                    shape_text = Some(String::new());
                    paragraphs = 0;
                }
                b"pic" => slide.pictures += 1,
                b"p" => {
                    if let Some(text) = shape_text.as_mut() {
                        if paragraphs > 0 {
                            text.push('\n');
                        }
                        paragraphs += 1;
                    }
                }
                b"r" => {
                    run_bold = false;
                    run_text.clear();
                }
                b"rPr" => run_bold = is_bold(e),
                b"fld" => {
                    in_field = true;
                    field_text.clear();
                }
                b"br" => {
                    if let Some(text) = shape_text.as_mut() {
                        text.push('\n');
                    }
                }
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match local_name(e.name().as_ref()) {
                b"rPr" => run_bold = is_bold(e),
                b"br" => {
                    if let Some(text) = shape_text.as_mut() {
                        text.push('\n');
                    }
                }
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text => {
                let text = e.unescape().unwrap_or_default();
                if in_field {
                    field_text.push_str(&text);
                } else {
                    run_text.push_str(&text);
                    if let Some(shape) = shape_text.as_mut() {
                        shape.push_str(&text);
                    }
                }
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"t" => in_text = false,
                b"r" => {
                    if run_bold && !run_text.trim().is_empty() {
                        slide.bold.push(run_text.clone());
                    }
                    run_text.clear();
                }
                b"fld" => {
                    in_field = false;
                    slide.slide_number = Some(field_text.trim().to_string());
                }
                b"sp" => {
                    if let Some(text) = shape_text.take() {
                        let text = text.trim();
                        if !text.is_empty() {
                            slide.texts.push(text.to_string());
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                log::warn!("XML parsing error, keeping text read so far: {}", e);
                break;
            }
            _ => {}
        }
    }

    Ok(slide)
}

fn read_file_from_archive<R: Read + Seek>(archive: &mut ZipArchive<R>, path: &str) -> Result<String> {
    let mut file = archive
        .by_name(path)
        .map_err(|e| Error::ZipError(format!("File not found in archive '{}': {}", path, e)))?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

    Ok(content)
}

fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

fn is_bold(e: &BytesStart<'_>) -> bool {
    matches!(attribute(e, b"b").as_deref(), Some("1") | Some("true"))
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Extract a slide number from a string like "rId2" or "slide3.xml".
fn extract_slide_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml").trim_end_matches(".rels");

    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}
