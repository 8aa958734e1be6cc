//! PPTX (Office Open XML) backend for generated decks.
//!
//! Assembles laid-out slides into .pptx files, which are ZIP archives
//! containing XML documents, and reads them back for inspection.

pub mod assembler;
pub mod reader;
pub mod writer;
mod xml;

pub use assembler::PresentationAssembler;
pub use reader::{DeckReader, DeckSummary, SlideSummary};
pub use writer::PptxWriter;
pub use xml::{emu, EMU_PER_INCH};
