//! Thin XML writing helpers over quick-xml.

use deck_core::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// English Metric Units per inch.
pub const EMU_PER_INCH: f64 = 914_400.0;

/// Convert inches to EMUs.
pub fn emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

/// An XML document under construction.
pub(crate) struct XmlOut {
    writer: Writer<Vec<u8>>,
}

impl XmlOut {
    /// Start a standalone UTF-8 document.
    pub fn new() -> Result<Self> {
        let mut out = Self {
            writer: Writer::new(Vec::new()),
        };
        out.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(out)
    }

    fn write(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| Error::XmlError(format!("Failed to write XML: {}", e)))
    }

    pub fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut elem = BytesStart::new(name);
        for &attr in attrs {
            elem.push_attribute(attr);
        }
        self.write(Event::Start(elem))
    }

    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut elem = BytesStart::new(name);
        for &attr in attrs {
            elem.push_attribute(attr);
        }
        self.write(Event::Empty(elem))
    }

    /// Escaped character data.
    pub fn text(&mut self, text: &str) -> Result<()> {
        self.write(Event::Text(BytesText::new(text)))
    }

    pub fn end(&mut self, name: &str) -> Result<()> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// `<name attrs>text</name>`
    pub fn leaf(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
        self.start(name, attrs)?;
        self.text(text)?;
        self.end(name)
    }

    /// `<a:solidFill><a:srgbClr val=".."/></a:solidFill>`
    pub fn solid_fill(&mut self, color: &str) -> Result<()> {
        self.start("a:solidFill", &[])?;
        self.empty("a:srgbClr", &[("val", color)])?;
        self.end("a:solidFill")
    }

    /// Shape transform for a rectangle given in inches.
    pub fn xfrm(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<()> {
        let (x, y, w, h) = (
            emu(x).to_string(),
            emu(y).to_string(),
            emu(w).to_string(),
            emu(h).to_string(),
        );
        self.start("a:xfrm", &[])?;
        self.empty("a:off", &[("x", x.as_str()), ("y", y.as_str())])?;
        self.empty("a:ext", &[("cx", w.as_str()), ("cy", h.as_str())])?;
        self.end("a:xfrm")
    }

    /// `<a:prstGeom prst=".."><a:avLst/></a:prstGeom>`
    pub fn preset_geometry(&mut self, preset: &str) -> Result<()> {
        self.start("a:prstGeom", &[("prst", preset)])?;
        self.empty("a:avLst", &[])?;
        self.end("a:prstGeom")
    }

    pub fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}
