use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum Error {
    /// The characters-per-line budget leaves no room for any text
    #[error("maximum characters per line must be at least 1")]
    ZeroMaxChars,

    /// The line-height multiplier would collapse or invert the line grid
    #[error("line height factor must be positive and finite (got {factor})")]
    InvalidLineHeight { factor: f32 },

    /// The vertical margins leave no content area on the page
    #[error("page height {page_height} does not exceed the vertical margins {margins}")]
    MarginsExceedPage { page_height: Pt, margins: Pt },

    #[error(transparent)]
    /// An I/O error occurred while writing the rendered document
    Io(#[from] std::io::Error),
}
