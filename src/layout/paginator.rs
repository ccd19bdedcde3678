use log::debug;

use super::geometry::PageGeometry;
use super::wrap::wrap;
use crate::colour::colours;
use crate::document::Document;
use crate::error::Error;
use crate::font::BuiltinFont;
use crate::page::{Page, SpanFont, SpanLayout};
use crate::units::Pt;

/// The literal appended to a section title on every continuation page.
/// Continuations are not numbered; a block that overflows three times carries
/// the same suffix three times.
pub const CONTINUATION_SUFFIX: &str = " (cont.)";

const COVER_TITLE_SIZE: Pt = Pt(16.0);
const COVER_SUBTITLE_SIZE: Pt = Pt(10.0);
const COVER_SUBTITLE_DROP: Pt = Pt(18.0);

/// One named unit of source text to be paginated, e.g. one file's contents.
/// The body may contain embedded line breaks; both fields are read-only for
/// the duration of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub title: String,
    pub body: String,
}

impl TextBlock {
    pub fn new<T: Into<String>, B: Into<String>>(title: T, body: B) -> TextBlock {
        TextBlock {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// The vertical write position on the page being built. Owned by a single
/// paginator run; there is no shared drawing state between runs.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Cursor {
    y: Pt,
}

impl Cursor {
    /// Position for the first body line under a title drawn at `baseline`.
    fn under_title(baseline: Pt, geometry: &PageGeometry) -> Cursor {
        Cursor {
            y: baseline - geometry.title_drop(),
        }
    }

    /// Whether the cursor has reached or crossed the bottom margin.
    fn past_bottom(&self, geometry: &PageGeometry) -> bool {
        self.y <= geometry.bottom_y()
    }

    /// Vertical space left between the cursor and the bottom margin.
    fn room_left(&self, geometry: &PageGeometry) -> Pt {
        self.y - geometry.bottom_y()
    }

    fn advance(&mut self, line_height: Pt) {
        self.y -= line_height;
    }
}

/// Lays monospace text blocks out across fixed-size pages: wraps each block's
/// body at the geometry's character budget, walks the wrapped lines down the
/// page, and opens a continuation page (title re-drawn with
/// [CONTINUATION_SUFFIX]) whenever the cursor reaches the bottom margin.
///
/// Every run emits a cover page first, then the blocks strictly in input
/// order. The computation is pure and synchronous; a `Paginator` can be
/// shared freely and two concurrent [`paginate`](Paginator::paginate) calls
/// never observe each other.
#[derive(Debug, Clone)]
pub struct Paginator {
    geometry: PageGeometry,
    cover_title: String,
    cover_subtitle: String,
}

impl Paginator {
    /// Create a paginator, validating the geometry up front. A geometry the
    /// validator accepts can never fail mid-layout, so this is the only
    /// fallible step of a run.
    pub fn new(geometry: PageGeometry) -> Result<Paginator, Error> {
        geometry.validate()?;
        Ok(Paginator {
            geometry,
            cover_title: "Source Listing".to_string(),
            cover_subtitle: String::new(),
        })
    }

    /// Replace the cover page's title and subtitle. The cover layout itself
    /// (a 16 pt title at the top margin, a 10 pt subtitle 18 pt below it) is
    /// fixed; an empty subtitle is simply omitted.
    pub fn with_cover<T: Into<String>, S: Into<String>>(mut self, title: T, subtitle: S) -> Self {
        self.cover_title = title.into();
        self.cover_subtitle = subtitle.into();
        self
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Lay the blocks out into a finished [Document]. Never fails: any body
    /// text, including empty strings and arbitrarily long lines, is handled
    /// by the wrap/continuation policy.
    pub fn paginate(&self, blocks: &[TextBlock]) -> Document {
        let geometry = &self.geometry;
        let line_height = geometry.line_height();

        let mut pages = vec![self.cover_page()];

        // the page currently accepting content, with the cursor for its next line
        let mut open: Option<(Page, Cursor)> = None;

        for block in blocks {
            // a fresh page gets the title at the top margin; a shared page
            // (the previous block left at least two line-heights) gets it at
            // the cursor
            let (mut page, title_baseline) = match open.take() {
                Some((page, cursor)) => (page, cursor.y),
                None => (self.blank_page(), geometry.top_y()),
            };
            page.add_title(self.title_span(&block.title, title_baseline));
            let mut cursor = Cursor::under_title(title_baseline, geometry);

            for line in wrap(&block.body, geometry.max_chars) {
                if cursor.past_bottom(geometry) {
                    debug!(
                        "page {} full, continuing \"{}\" on a new page",
                        pages.len(),
                        block.title
                    );
                    pages.push(page);
                    page = self.blank_page();
                    let continued = format!("{}{}", block.title, CONTINUATION_SUFFIX);
                    page.add_title(self.title_span(&continued, geometry.top_y()));
                    cursor = Cursor::under_title(geometry.top_y(), geometry);
                }
                page.add_line(SpanLayout {
                    text: line,
                    font: SpanFont {
                        font: geometry.body_font,
                        size: geometry.body_size,
                    },
                    colour: colours::BLACK,
                    coords: (geometry.left_x(), cursor.y),
                });
                cursor.advance(line_height);
            }

            // end-of-block spacing rule: less than two line-heights left
            // forces the next block onto a fresh page; otherwise reserve one
            // line-height of trailing space and share the page
            if cursor.room_left(geometry) < line_height * 2.0 {
                pages.push(page);
            } else {
                cursor.advance(line_height);
                open = Some((page, cursor));
            }
        }

        if let Some((page, _)) = open {
            pages.push(page);
        }

        debug!(
            "laid out {} block(s) across {} page(s)",
            blocks.len(),
            pages.len()
        );
        Document::new(pages)
    }

    fn blank_page(&self) -> Page {
        Page::new(self.geometry.page_size, &self.geometry.margins)
    }

    fn title_span(&self, text: &str, baseline: Pt) -> SpanLayout {
        SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                font: self.geometry.title_font,
                size: self.geometry.title_size,
            },
            colour: colours::BLACK,
            coords: (self.geometry.left_x(), baseline),
        }
    }

    fn cover_page(&self) -> Page {
        let geometry = &self.geometry;
        let mut page = self.blank_page();
        page.add_title(SpanLayout {
            text: self.cover_title.clone(),
            font: SpanFont {
                font: geometry.title_font,
                size: COVER_TITLE_SIZE,
            },
            colour: colours::BLACK,
            coords: (geometry.left_x(), geometry.top_y()),
        });
        if !self.cover_subtitle.is_empty() {
            page.add_line(SpanLayout {
                text: self.cover_subtitle.clone(),
                font: SpanFont {
                    font: BuiltinFont::Helvetica,
                    size: COVER_SUBTITLE_SIZE,
                },
                colour: colours::DARK_GREY,
                coords: (geometry.left_x(), geometry.top_y() - COVER_SUBTITLE_DROP),
            });
        }
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Margins;
    use crate::pagesize;

    fn paginator() -> Paginator {
        Paginator::new(PageGeometry::listing_letter()).unwrap()
    }

    #[test]
    fn every_run_starts_with_a_cover_page() {
        let doc = paginator()
            .with_cover("My Listing", "generated for a test")
            .paginate(&[]);
        assert_eq!(doc.page_count(), 1);
        let cover = &doc.pages()[0];
        assert_eq!(cover.title().unwrap().text, "My Listing");
        let subtitles: Vec<_> = cover.lines().collect();
        assert_eq!(subtitles.len(), 1);
        assert_eq!(subtitles[0].text, "generated for a test");
    }

    #[test]
    fn empty_subtitle_is_omitted() {
        let doc = paginator().with_cover("Cover", "").paginate(&[]);
        assert_eq!(doc.pages()[0].lines().count(), 0);
    }

    #[test]
    fn short_blocks_share_a_page() {
        let doc = paginator().paginate(&[
            TextBlock::new("a.txt", "one\ntwo"),
            TextBlock::new("b.txt", "three"),
        ]);
        // cover + one shared content page
        assert_eq!(doc.page_count(), 2);
        let page = &doc.pages()[1];
        let titles: Vec<_> = page
            .items()
            .iter()
            .filter_map(|item| match item {
                crate::PageItem::Title(span) => Some(span.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(titles, vec!["a.txt", "b.txt"]);

        // the second title sits strictly below the first block's last line
        let first_lines: Vec<_> = page.lines().collect();
        let second_title_y = page
            .items()
            .iter()
            .filter_map(|item| match item {
                crate::PageItem::Title(span) if span.text == "b.txt" => Some(span.coords.1),
                _ => None,
            })
            .next()
            .unwrap();
        assert!(second_title_y < first_lines[1].coords.1);
    }

    #[test]
    fn title_is_placed_at_the_top_margin_of_a_fresh_page() {
        let geometry = PageGeometry::listing_letter();
        let doc = paginator().paginate(&[TextBlock::new("index.html", "<html>")]);
        let page = &doc.pages()[1];
        let title = page.title().unwrap();
        assert_eq!(title.coords, (Pt(54.0), geometry.page_size.1 - Pt(54.0)));
        assert_eq!(title.font.font, BuiltinFont::HelveticaBold);
    }

    #[test]
    fn small_geometry_still_draws_titles() {
        // a page so short only one body line fits under the title; every
        // further line opens a continuation page, each with its own title
        let geometry = PageGeometry {
            page_size: (Pt(200.0), Pt(40.0)),
            margins: Margins::symmetric(Pt(12.0), Pt(10.0)),
            body_size: Pt(10.0),
            line_height_factor: 1.0,
            max_chars: 16,
            ..PageGeometry::listing_letter()
        };
        let paginator = Paginator::new(geometry).unwrap();
        let doc = paginator.paginate(&[TextBlock::new("t", "a\nb")]);
        for page in &doc.pages()[1..] {
            assert!(page.title().is_some());
        }
        assert_eq!(doc.page_count(), 3); // cover + one page per line
    }

    #[test]
    fn geometry_is_validated_at_construction() {
        let geometry = PageGeometry {
            max_chars: 0,
            page_size: pagesize::A5,
            ..PageGeometry::listing_letter()
        };
        assert!(Paginator::new(geometry).is_err());
    }
}
