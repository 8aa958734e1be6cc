//! PPTX package writer.
//!
//! Serializes laid-out slides into an Office Open XML presentation: a ZIP
//! archive of XML parts plus embedded pictures. Template chrome and the
//! slide number are drawn directly on every slide.

use std::io::{Cursor, Write};

use chrono::{NaiveDateTime, Utc};
use deck_core::canvas::{SLIDE_HEIGHT, SLIDE_WIDTH};
use deck_core::slide::{Align, Anchor, Element, ImageBox, PhysicalSlide, TextBox, TextRun, TextStyle};
use deck_core::template::{Chrome, Template, TITLE_COLOR};
use deck_core::{Error, ImageFormat, Result};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::xml::{emu, XmlOut};

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const NS_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

const REL_SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
const REL_IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

const CT_SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";

/// Field id PowerPoint uses for slide-number fields.
const SLIDE_NUMBER_FIELD_ID: &str = "{B6F15528-21DE-4FAA-801E-634DDDAF4B2B}";

/// Bullet character and hanging indent.
const BULLET_CHAR: &str = "•";
const BULLET_MARGIN: f64 = 0.25;

const APPLICATION: &str = "deck-gen";

/// Writes physical slides as a `.pptx` archive.
#[derive(Debug, Clone)]
pub struct PptxWriter {
    template: Template,
    title: String,
    created: Option<NaiveDateTime>,
}

impl PptxWriter {
    /// Create a writer for a template.
    pub fn new(template: Template) -> Self {
        Self {
            template,
            title: String::new(),
            created: None,
        }
    }

    /// Set the document title stored in the package properties.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Fix the creation timestamp instead of using the current time.
    pub fn with_created(mut self, created: NaiveDateTime) -> Self {
        self.created = Some(created);
        self
    }

    /// Serialize slides into the bytes of a `.pptx` file.
    pub fn write(&self, slides: &[PhysicalSlide]) -> Result<Vec<u8>> {
        if slides.is_empty() {
            return Err(Error::EmptyDeck);
        }

        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let mut package = Package {
            zip: &mut zip,
            options,
        };

        // Pictures are numbered across the whole deck.
        let mut media: Vec<(String, &ImageBox)> = Vec::new();
        let mut slide_media: Vec<Vec<String>> = Vec::with_capacity(slides.len());
        for slide in slides {
            let mut names = Vec::new();
            for image in slide.images() {
                let name = format!("image{}.{}", media.len() + 1, image.format.extension());
                names.push(name.clone());
                media.push((name, image));
            }
            slide_media.push(names);
        }

        package.add("[Content_Types].xml", &content_types(slides.len())?)?;
        package.add("_rels/.rels", ROOT_RELS.as_bytes())?;
        package.add("docProps/app.xml", app_properties(slides.len()).as_bytes())?;
        package.add("docProps/core.xml", &self.core_properties()?)?;
        package.add("ppt/presentation.xml", &presentation(slides.len())?)?;
        package.add("ppt/_rels/presentation.xml.rels", &presentation_rels(slides.len())?)?;
        package.add("ppt/slideMasters/slideMaster1.xml", SLIDE_MASTER.as_bytes())?;
        package.add("ppt/slideMasters/_rels/slideMaster1.xml.rels", MASTER_RELS.as_bytes())?;
        package.add("ppt/slideLayouts/slideLayout1.xml", SLIDE_LAYOUT.as_bytes())?;
        package.add("ppt/slideLayouts/_rels/slideLayout1.xml.rels", LAYOUT_RELS.as_bytes())?;
        package.add("ppt/theme/theme1.xml", THEME.as_bytes())?;

        for (index, (slide, images)) in slides.iter().zip(&slide_media).enumerate() {
            let number = index + 1;
            package.add(
                &format!("ppt/slides/slide{}.xml", number),
                &self.slide_xml(slide, number)?,
            )?;
            package.add(
                &format!("ppt/slides/_rels/slide{}.xml.rels", number),
                &slide_rels(images)?,
            )?;
        }

        for (name, image) in &media {
            package.add(&format!("ppt/media/{}", name), &image.data)?;
        }

        let cursor = zip
            .finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))?;
        let bytes = cursor.into_inner();

        log::debug!(
            "Wrote {} slides and {} pictures ({} bytes)",
            slides.len(),
            media.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    fn core_properties(&self) -> Result<Vec<u8>> {
        let created = self
            .created
            .unwrap_or_else(|| Utc::now().naive_utc())
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string();

        let mut out = XmlOut::new()?;
        out.start(
            "cp:coreProperties",
            &[
                (
                    "xmlns:cp",
                    "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
                ),
                ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
                ("xmlns:dcterms", "http://purl.org/dc/terms/"),
                ("xmlns:dcmitype", "http://purl.org/dc/dcmitype/"),
                ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
            ],
        )?;
        out.leaf("dc:title", &[], &self.title)?;
        out.leaf("dc:creator", &[], APPLICATION)?;
        out.leaf("cp:lastModifiedBy", &[], APPLICATION)?;
        out.leaf("cp:revision", &[], "1")?;
        out.leaf("dcterms:created", &[("xsi:type", "dcterms:W3CDTF")], &created)?;
        out.leaf("dcterms:modified", &[("xsi:type", "dcterms:W3CDTF")], &created)?;
        out.end("cp:coreProperties")?;
        Ok(out.finish())
    }

    fn slide_xml(&self, slide: &PhysicalSlide, number: usize) -> Result<Vec<u8>> {
        let mut out = XmlOut::new()?;
        let mut ids = ShapeIds::new();

        out.start("p:sld", &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)])?;
        out.start("p:cSld", &[])?;

        out.start("p:bg", &[])?;
        out.start("p:bgPr", &[])?;
        out.solid_fill(self.template.background())?;
        out.empty("a:effectLst", &[])?;
        out.end("p:bgPr")?;
        out.end("p:bg")?;

        out.start("p:spTree", &[])?;
        out.start("p:nvGrpSpPr", &[])?;
        out.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
        out.empty("p:cNvGrpSpPr", &[])?;
        out.empty("p:nvPr", &[])?;
        out.end("p:nvGrpSpPr")?;
        out.empty("p:grpSpPr", &[])?;

        for chrome in self.template.chrome() {
            write_chrome(&mut out, ids.next(), chrome)?;
        }

        let mut image_rel = 2;
        for element in &slide.elements {
            match element {
                Element::Text(text) => write_text_box(&mut out, ids.next(), text)?,
                Element::Image(image) => {
                    write_picture(&mut out, ids.next(), image, &format!("rId{}", image_rel))?;
                    image_rel += 1;
                }
            }
        }

        self.write_slide_number(&mut out, ids.next(), number)?;

        out.end("p:spTree")?;
        out.end("p:cSld")?;
        out.start("p:clrMapOvr", &[])?;
        out.empty("a:masterClrMapping", &[])?;
        out.end("p:clrMapOvr")?;
        out.end("p:sld")?;
        Ok(out.finish())
    }

    fn write_slide_number(&self, out: &mut XmlOut, id: u32, number: usize) -> Result<()> {
        let style = self.template.slide_number();
        let text_style = TextStyle {
            color: style.color,
            font_face: style.font_face,
            ..TextStyle::body(style.font_size)
        };

        open_shape(out, id, "Slide Number", true)?;
        out.xfrm(style.x, style.y, 0.8, 0.3)?;
        out.preset_geometry("rect")?;
        out.empty("a:noFill", &[])?;
        out.end("p:spPr")?;

        out.start("p:txBody", &[])?;
        write_body_properties(out, Anchor::Middle)?;
        out.start("a:p", &[])?;
        out.start("a:fld", &[("id", SLIDE_NUMBER_FIELD_ID), ("type", "slidenum")])?;
        write_run_properties(out, &text_style, false)?;
        out.leaf("a:t", &[], &number.to_string())?;
        out.end("a:fld")?;
        out.end("a:p")?;
        out.end("p:txBody")?;
        out.end("p:sp")
    }
}

/// A ZIP archive being filled with package parts.
struct Package<'a> {
    zip: &'a mut ZipWriter<Cursor<Vec<u8>>>,
    options: FileOptions,
}

impl Package<'_> {
    fn add(&mut self, path: &str, data: &[u8]) -> Result<()> {
        self.zip
            .start_file(path, self.options)
            .map_err(|e| Error::ZipError(format!("Failed to start '{}': {}", path, e)))?;
        self.zip
            .write_all(data)
            .map_err(|e| Error::ZipError(format!("Failed to write '{}': {}", path, e)))
    }
}

/// Shape ids are unique within a slide; id 1 is the shape tree itself.
struct ShapeIds(u32);

impl ShapeIds {
    fn new() -> Self {
        Self(1)
    }

    fn next(&mut self) -> u32 {
        self.0 += 1;
        self.0
    }
}

/// Writes `<p:sp>`, its non-visual properties and opens `<p:spPr>`.
fn open_shape(out: &mut XmlOut, id: u32, name: &str, text_box: bool) -> Result<()> {
    let id = id.to_string();
    let name = format!("{} {}", name, id);
    out.start("p:sp", &[])?;
    out.start("p:nvSpPr", &[])?;
    out.empty("p:cNvPr", &[("id", id.as_str()), ("name", name.as_str())])?;
    if text_box {
        out.empty("p:cNvSpPr", &[("txBox", "1")])?;
    } else {
        out.empty("p:cNvSpPr", &[])?;
    }
    out.empty("p:nvPr", &[])?;
    out.end("p:nvSpPr")?;
    out.start("p:spPr", &[])
}

fn write_chrome(out: &mut XmlOut, id: u32, chrome: &Chrome) -> Result<()> {
    match *chrome {
        Chrome::Bar { x, y, w, h, color } => {
            open_shape(out, id, "Bar", false)?;
            out.xfrm(x, y, w, h)?;
            out.preset_geometry("rect")?;
            out.solid_fill(color)?;
            out.start("a:ln", &[])?;
            out.empty("a:noFill", &[])?;
            out.end("a:ln")?;
            out.end("p:spPr")?;
            out.end("p:sp")
        }
        Chrome::Rule {
            x,
            y,
            w,
            color,
            weight_pt,
        } => {
            let id = id.to_string();
            let name = format!("Rule {}", id);
            let weight = emu(weight_pt / 72.0).to_string();
            out.start("p:cxnSp", &[])?;
            out.start("p:nvCxnSpPr", &[])?;
            out.empty("p:cNvPr", &[("id", id.as_str()), ("name", name.as_str())])?;
            out.empty("p:cNvCxnSpPr", &[])?;
            out.empty("p:nvPr", &[])?;
            out.end("p:nvCxnSpPr")?;
            out.start("p:spPr", &[])?;
            out.xfrm(x, y, w, 0.0)?;
            out.preset_geometry("line")?;
            out.start("a:ln", &[("w", weight.as_str())])?;
            out.solid_fill(color)?;
            out.end("a:ln")?;
            out.end("p:spPr")?;
            out.end("p:cxnSp")
        }
    }
}

fn write_body_properties(out: &mut XmlOut, anchor: Anchor) -> Result<()> {
    let anchor = match anchor {
        Anchor::Top => "t",
        Anchor::Middle => "ctr",
    };
    out.empty(
        "a:bodyPr",
        &[
            ("wrap", "square"),
            ("lIns", "91440"),
            ("tIns", "45720"),
            ("rIns", "91440"),
            ("bIns", "45720"),
            ("rtlCol", "0"),
            ("anchor", anchor),
        ],
    )?;
    out.empty("a:lstStyle", &[])
}

fn write_run_properties(out: &mut XmlOut, style: &TextStyle, emphasis: bool) -> Result<()> {
    let size = ((style.font_size * 100.0).round() as i64).to_string();
    let bold = if style.bold || emphasis { "1" } else { "0" };
    let italic = if style.italic { "1" } else { "0" };
    let color = if emphasis { TITLE_COLOR } else { style.color };

    out.start(
        "a:rPr",
        &[
            ("lang", "en-US"),
            ("sz", size.as_str()),
            ("b", bold),
            ("i", italic),
            ("dirty", "0"),
        ],
    )?;
    out.solid_fill(color)?;
    out.empty("a:latin", &[("typeface", style.font_face)])?;
    out.end("a:rPr")
}

fn write_run(out: &mut XmlOut, run: &TextRun, style: &TextStyle) -> Result<()> {
    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            out.start("a:br", &[])?;
            write_run_properties(out, style, false)?;
            out.end("a:br")?;
        }
        if line.is_empty() {
            continue;
        }
        out.start("a:r", &[])?;
        write_run_properties(out, style, run.emphasis)?;
        out.leaf("a:t", &[], line)?;
        out.end("a:r")?;
    }
    Ok(())
}

fn write_text_box(out: &mut XmlOut, id: u32, text: &TextBox) -> Result<()> {
    let style = &text.style;
    let frame = text.frame;

    open_shape(out, id, "TextBox", true)?;
    out.xfrm(frame.x, frame.y, frame.w, frame.h)?;
    out.preset_geometry("rect")?;
    out.empty("a:noFill", &[])?;
    out.end("p:spPr")?;

    out.start("p:txBody", &[])?;
    write_body_properties(out, style.anchor)?;

    let align = match style.align {
        Align::Left => "l",
        Align::Center => "ctr",
        Align::Right => "r",
    };
    out.start("a:p", &[])?;
    match style.bullet {
        Some(level) => {
            let margin = emu(BULLET_MARGIN).to_string();
            let indent = (-emu(BULLET_MARGIN)).to_string();
            let level = level.min(8).to_string();
            out.start(
                "a:pPr",
                &[
                    ("marL", margin.as_str()),
                    ("lvl", level.as_str()),
                    ("indent", indent.as_str()),
                    ("algn", align),
                ],
            )?;
            out.empty("a:buFont", &[("typeface", "Arial")])?;
            out.empty("a:buChar", &[("char", BULLET_CHAR)])?;
            out.end("a:pPr")?;
        }
        None => {
            out.start("a:pPr", &[("algn", align)])?;
            out.empty("a:buNone", &[])?;
            out.end("a:pPr")?;
        }
    }
    for run in &text.runs {
        write_run(out, run, style)?;
    }
    out.end("a:p")?;
    out.end("p:txBody")?;
    out.end("p:sp")
}

fn write_picture(out: &mut XmlOut, id: u32, image: &ImageBox, rel_id: &str) -> Result<()> {
    let id = id.to_string();
    let name = format!("Picture {}", id);
    let frame = image.frame;

    out.start("p:pic", &[])?;
    out.start("p:nvPicPr", &[])?;
    out.empty(
        "p:cNvPr",
        &[("id", id.as_str()), ("name", name.as_str()), ("descr", image.description.as_str())],
    )?;
    out.start("p:cNvPicPr", &[])?;
    out.empty("a:picLocks", &[("noChangeAspect", "1")])?;
    out.end("p:cNvPicPr")?;
    out.empty("p:nvPr", &[])?;
    out.end("p:nvPicPr")?;

    out.start("p:blipFill", &[])?;
    out.empty("a:blip", &[("r:embed", rel_id)])?;
    out.start("a:stretch", &[])?;
    out.empty("a:fillRect", &[])?;
    out.end("a:stretch")?;
    out.end("p:blipFill")?;

    out.start("p:spPr", &[])?;
    out.xfrm(frame.x, frame.y, frame.w, frame.h)?;
    out.preset_geometry("rect")?;
    out.end("p:spPr")?;
    out.end("p:pic")
}

fn content_types(slide_count: usize) -> Result<Vec<u8>> {
    let mut out = XmlOut::new()?;
    out.start(
        "Types",
        &[(
            "xmlns",
            "http://schemas.openxmlformats.org/package/2006/content-types",
        )],
    )?;

    out.empty(
        "Default",
        &[
            ("Extension", "rels"),
            ("ContentType", "application/vnd.openxmlformats-package.relationships+xml"),
        ],
    )?;
    out.empty("Default", &[("Extension", "xml"), ("ContentType", "application/xml")])?;
    for format in [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Gif] {
        out.empty(
            "Default",
            &[
                ("Extension", format.extension()),
                ("ContentType", format.content_type()),
            ],
        )?;
    }

    let parts = [
        (
            "/ppt/presentation.xml",
            "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml",
        ),
        (
            "/ppt/slideMasters/slideMaster1.xml",
            "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml",
        ),
        (
            "/ppt/slideLayouts/slideLayout1.xml",
            "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml",
        ),
        (
            "/ppt/theme/theme1.xml",
            "application/vnd.openxmlformats-officedocument.theme+xml",
        ),
        (
            "/docProps/app.xml",
            "application/vnd.openxmlformats-officedocument.extended-properties+xml",
        ),
        (
            "/docProps/core.xml",
            "application/vnd.openxmlformats-package.core-properties+xml",
        ),
    ];
    for (part, content_type) in parts {
        out.empty("Override", &[("PartName", part), ("ContentType", content_type)])?;
    }
    for number in 1..=slide_count {
        let part = format!("/ppt/slides/slide{}.xml", number);
        out.empty("Override", &[("PartName", part.as_str()), ("ContentType", CT_SLIDE)])?;
    }

    out.end("Types")?;
    Ok(out.finish())
}

fn presentation(slide_count: usize) -> Result<Vec<u8>> {
    let cx = emu(SLIDE_WIDTH).to_string();
    let cy = emu(SLIDE_HEIGHT).to_string();

    let mut out = XmlOut::new()?;
    out.start(
        "p:presentation",
        &[
            ("xmlns:a", NS_A),
            ("xmlns:r", NS_R),
            ("xmlns:p", NS_P),
            ("saveSubsetFonts", "1"),
        ],
    )?;
    out.start("p:sldMasterIdLst", &[])?;
    out.empty("p:sldMasterId", &[("id", "2147483648"), ("r:id", "rId1")])?;
    out.end("p:sldMasterIdLst")?;

    out.start("p:sldIdLst", &[])?;
    for number in 1..=slide_count {
        let id = (255 + number).to_string();
        let rel = format!("rId{}", number + 2);
        out.empty("p:sldId", &[("id", id.as_str()), ("r:id", rel.as_str())])?;
    }
    out.end("p:sldIdLst")?;

    out.empty("p:sldSz", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    out.empty("p:notesSz", &[("cx", "6858000"), ("cy", "9144000")])?;
    out.end("p:presentation")?;
    Ok(out.finish())
}

/// rId1 is the master, rId2 the theme, slides follow from rId3.
fn presentation_rels(slide_count: usize) -> Result<Vec<u8>> {
    let mut out = XmlOut::new()?;
    out.start("Relationships", &[("xmlns", NS_RELS)])?;
    out.empty(
        "Relationship",
        &[
            ("Id", "rId1"),
            ("Type", REL_MASTER),
            ("Target", "slideMasters/slideMaster1.xml"),
        ],
    )?;
    out.empty(
        "Relationship",
        &[("Id", "rId2"), ("Type", REL_THEME), ("Target", "theme/theme1.xml")],
    )?;
    for number in 1..=slide_count {
        let id = format!("rId{}", number + 2);
        let target = format!("slides/slide{}.xml", number);
        out.empty(
            "Relationship",
            &[("Id", id.as_str()), ("Type", REL_SLIDE), ("Target", target.as_str())],
        )?;
    }
    out.end("Relationships")?;
    Ok(out.finish())
}

/// rId1 is the layout, pictures follow from rId2 in placement order.
fn slide_rels(images: &[String]) -> Result<Vec<u8>> {
    let mut out = XmlOut::new()?;
    out.start("Relationships", &[("xmlns", NS_RELS)])?;
    out.empty(
        "Relationship",
        &[
            ("Id", "rId1"),
            ("Type", REL_LAYOUT),
            ("Target", "../slideLayouts/slideLayout1.xml"),
        ],
    )?;
    for (i, name) in images.iter().enumerate() {
        let id = format!("rId{}", i + 2);
        let target = format!("../media/{}", name);
        out.empty(
            "Relationship",
            &[("Id", id.as_str()), ("Type", REL_IMAGE), ("Target", target.as_str())],
        )?;
    }
    out.end("Relationships")?;
    Ok(out.finish())
}

fn app_properties(slide_count: usize) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
  <TotalTime>0</TotalTime>
  <Application>{}</Application>
  <PresentationFormat>On-screen Show (16:9)</PresentationFormat>
  <Slides>{}</Slides>
  <Notes>0</Notes>
  <HiddenSlides>0</HiddenSlides>
  <ScaleCrop>false</ScaleCrop>
  <LinksUpToDate>false</LinksUpToDate>
  <SharedDoc>false</SharedDoc>
  <HyperlinksChanged>false</HyperlinksChanged>
  <AppVersion>16.0000</AppVersion>
</Properties>"#,
        APPLICATION, slide_count
    )
}

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
</Relationships>"#;

const SLIDE_MASTER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
  <p:cSld>
    <p:bg>
      <p:bgRef idx="1001">
        <a:schemeClr val="bg1"/>
      </p:bgRef>
    </p:bg>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
  </p:cSld>
  <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
  <p:sldLayoutIdLst>
    <p:sldLayoutId id="2147483649" r:id="rId1"/>
  </p:sldLayoutIdLst>
  <p:txStyles>
    <p:titleStyle/>
    <p:bodyStyle/>
    <p:otherStyle/>
  </p:txStyles>
</p:sldMaster>"#;

const MASTER_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/>
</Relationships>"#;

const SLIDE_LAYOUT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank" preserve="1">
  <p:cSld name="Blank">
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
  </p:cSld>
  <p:clrMapOvr>
    <a:masterClrMapping/>
  </p:clrMapOvr>
</p:sldLayout>"#;

const LAYOUT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#;

const THEME: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Deck Theme">
  <a:themeElements>
    <a:clrScheme name="Deck">
      <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
      <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
      <a:dk2><a:srgbClr val="333333"/></a:dk2>
      <a:lt2><a:srgbClr val="F8F9FA"/></a:lt2>
      <a:accent1><a:srgbClr val="2A6099"/></a:accent1>
      <a:accent2><a:srgbClr val="4472C4"/></a:accent2>
      <a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>
      <a:accent4><a:srgbClr val="FFC000"/></a:accent4>
      <a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>
      <a:accent6><a:srgbClr val="70AD47"/></a:accent6>
      <a:hlink><a:srgbClr val="0563C1"/></a:hlink>
      <a:folHlink><a:srgbClr val="954F72"/></a:folHlink>
    </a:clrScheme>
    <a:fontScheme name="Deck">
      <a:majorFont>
        <a:latin typeface="Arial"/>
        <a:ea typeface=""/>
        <a:cs typeface=""/>
      </a:majorFont>
      <a:minorFont>
        <a:latin typeface="Arial"/>
        <a:ea typeface=""/>
        <a:cs typeface=""/>
      </a:minorFont>
    </a:fontScheme>
    <a:fmtScheme name="Deck">
      <a:fillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:fillStyleLst>
      <a:lnStyleLst>
        <a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
      </a:lnStyleLst>
      <a:effectStyleLst>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
      </a:effectStyleLst>
      <a:bgFillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:bgFillStyleLst>
    </a:fmtScheme>
  </a:themeElements>
</a:theme>"#;
