use log::warn;

use super::margins::Margins;
use crate::error::Error;
use crate::font::BuiltinFont;
use crate::pagesize::{self, PageSize};
use crate::units::{In, Pt};

/// Vertical distance between a section title's baseline and the first body
/// line underneath it, expressed in body line-heights.
const TITLE_DROP_FACTOR: f32 = 1.4;

/// Everything the paginator needs to know about the shape of a page: paper
/// size, margins, the fonts and sizes for body text and section titles, the
/// line-height multiplier, and the characters-per-line budget used by the
/// hard wrapper.
///
/// `max_chars` is an approximation, not a measured bound: for a fixed-pitch
/// body font the rendered line width is `max_chars` glyph advances, and the
/// caller is expected to pick a budget that fits the content width. The
/// default geometry's 95 characters fit Courier at 9 pt on US-Letter with
/// 0.75 in margins. [`validate`](PageGeometry::validate) logs a warning when
/// the budget overshoots the content width, but it does not reject it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    pub page_size: PageSize,
    pub margins: Margins,
    pub body_font: BuiltinFont,
    pub body_size: Pt,
    pub title_font: BuiltinFont,
    pub title_size: Pt,
    /// Baseline-to-baseline distance between body lines, as a multiple of
    /// `body_size`.
    pub line_height_factor: f32,
    /// Hard-wrap budget: maximum characters per body line.
    pub max_chars: usize,
}

impl PageGeometry {
    /// The geometry of a US-Letter source listing: 0.75 in margins all
    /// around, 9 pt Courier body at 1.35 line height, 12 pt Helvetica-Bold
    /// titles, 95 characters per line.
    pub fn listing_letter() -> PageGeometry {
        PageGeometry {
            page_size: pagesize::LETTER,
            margins: Margins::all(In(0.75)),
            body_font: BuiltinFont::Courier,
            body_size: Pt(9.0),
            title_font: BuiltinFont::HelveticaBold,
            title_size: Pt(12.0),
            line_height_factor: 1.35,
            max_chars: 95,
        }
    }

    /// Check that layout is possible at all with this geometry. Called once
    /// per paginator, before any page is produced; content can never make a
    /// valid geometry fail mid-run.
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_chars == 0 {
            return Err(Error::ZeroMaxChars);
        }
        if !self.line_height_factor.is_finite() || self.line_height_factor <= 0.0 {
            return Err(Error::InvalidLineHeight {
                factor: self.line_height_factor,
            });
        }
        let vertical = self.margins.top + self.margins.bottom;
        if self.page_size.1 <= vertical {
            return Err(Error::MarginsExceedPage {
                page_height: self.page_size.1,
                margins: vertical,
            });
        }

        if let Some(advance) = self.body_font.char_advance(self.body_size) {
            let budget = advance * self.max_chars as f32;
            if budget > self.content_width() {
                warn!(
                    "characters-per-line budget {} is wider than the content area ({} > {}); long lines will overrun the right margin",
                    self.max_chars,
                    budget,
                    self.content_width()
                );
            }
        }

        Ok(())
    }

    /// Baseline-to-baseline distance between two body lines.
    pub fn line_height(&self) -> Pt {
        self.body_size * self.line_height_factor
    }

    /// Distance from a section title's baseline down to the first body line.
    pub fn title_drop(&self) -> Pt {
        self.line_height() * TITLE_DROP_FACTOR
    }

    /// Width of the area between the left and right margins.
    pub fn content_width(&self) -> Pt {
        self.page_size.0 - self.margins.left - self.margins.right
    }

    /// The y coordinate of the top margin, where titles are drawn.
    pub(crate) fn top_y(&self) -> Pt {
        self.page_size.1 - self.margins.top
    }

    /// The y coordinate of the bottom margin; the cursor may not reach it.
    pub(crate) fn bottom_y(&self) -> Pt {
        self.margins.bottom
    }

    /// The x coordinate all spans start at.
    pub(crate) fn left_x(&self) -> Pt {
        self.margins.left
    }
}
