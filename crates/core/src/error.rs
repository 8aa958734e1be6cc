//! Error types for deck generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while normalizing, laying out or serializing a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The presentation request contained no logical slides.
    #[error("Presentation has no content slides")]
    EmptyDeck,

    /// The requested template id does not exist.
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// A content block cannot be laid out.
    #[error("Invalid content block: {0}")]
    InvalidBlock(String),

    /// The text-generation collaborator failed or was unreachable.
    #[error("Text generation failed: {0}")]
    GenerationError(String),

    /// The text-generation collaborator answered with unusable content.
    #[error("Malformed generation response: {0}")]
    ResponseFormat(String),

    /// JSON decoding error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The QR collaborator could not produce an image.
    #[error("QR rendering failed: {0}")]
    QrError(String),

    /// ZIP archive error (for PPTX).
    #[error("ZIP archive error: {0}")]
    ZipError(String),

    /// XML writing or parsing error.
    #[error("XML error: {0}")]
    XmlError(String),

    /// The deck could not be turned into a presentation file.
    #[error("Failed to serialize presentation: {0}")]
    SerializationError(String),
}
