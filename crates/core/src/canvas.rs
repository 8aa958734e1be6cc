//! Fixed 16:9 slide geometry. All measurements are in inches.

/// Slide width.
pub const SLIDE_WIDTH: f64 = 10.0;

/// Slide height.
pub const SLIDE_HEIGHT: f64 = 5.625;

/// Left and right margin.
pub const MARGIN: f64 = 0.5;

/// Usable width between the margins.
pub const CONTENT_WIDTH: f64 = SLIDE_WIDTH - MARGIN * 2.0;

/// Height of the title band.
pub const TITLE_HEIGHT: f64 = 0.7;

/// Top edge of the title band.
pub const TITLE_Y: f64 = 0.2;

/// Where content starts on every slide.
pub const CONTENT_START_Y: f64 = 1.0;

/// Where content must end; the strip below is reserved for footer chrome.
pub const CONTENT_END_Y: f64 = SLIDE_HEIGHT - 0.3;

/// Height available to content on a single slide.
pub const CONTENT_HEIGHT: f64 = CONTENT_END_Y - CONTENT_START_Y;

/// Points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// A rectangle on the slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Frame {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Horizontal centre.
    pub fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }
}
