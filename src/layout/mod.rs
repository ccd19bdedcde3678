//! The layout engine: wrapping monospace text into width-bounded lines and
//! paginating named blocks of it across fixed-size pages.
//!
//! [`wrap`] is the line wrapper: split on explicit line breaks, then hard-cut
//! anything longer than the character budget. [`Paginator`] walks the wrapped
//! lines down each page with an explicit cursor, opening continuation pages
//! (title re-drawn with a `" (cont.)"` marker) whenever the cursor reaches
//! the bottom margin. The result is a [`Document`](crate::Document) of pages
//! holding nothing but positioned text spans; rendering those to bytes is the
//! renderer's business, not the engine's.
//!
//! # Example
//!
//! ```
//! use listing_pdf::layout::{PageGeometry, Paginator, TextBlock};
//!
//! let paginator = Paginator::new(PageGeometry::listing_letter())
//!     .expect("the default geometry is valid")
//!     .with_cover("Sources", "generated on demand");
//!
//! let blocks = [TextBlock::new("index.html", "<!DOCTYPE html>\n<html></html>")];
//! let document = paginator.paginate(&blocks);
//! assert_eq!(document.page_count(), 2); // cover + one content page
//! ```

mod geometry;
mod margins;
mod paginator;
mod wrap;

pub use geometry::*;
pub use margins::*;
pub use paginator::*;
pub use wrap::*;
