//! Core domain types, content normalization and dynamic slide layout
//! for generating presentation decks from articles.

pub mod canvas;
pub mod compose;
pub mod emphasis;
pub mod error;
pub mod estimate;
pub mod generate;
pub mod layout;
pub mod normalize;
pub mod qr;
pub mod slide;
pub mod template;
pub mod types;

pub use compose::compose_deck;
pub use error::{Error, Result};
pub use estimate::{CharCountEstimator, HeightEstimator};
pub use generate::{SlideGenerator, TextGenerator};
pub use layout::{LayoutConfig, LayoutEngine};
pub use normalize::extract_slides_from_article;
pub use qr::{ImageFormat, OfflineQrRenderer, QrRenderer};
pub use slide::{Element, PhysicalSlide, SlideKind};
pub use template::Template;
pub use types::{
    suggested_filename, Article, BlockKind, ContentBlock, LogicalSlide, PresentationRequest,
    Section,
};
