use crate::colour::Colour;
use crate::font::BuiltinFont;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;

/// The font a span is set in: one of the built-in base fonts plus a size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpanFont {
    pub font: BuiltinFont,
    pub size: Pt,
}

/// A single run of text positioned on a page. `coords` is the baseline
/// origin of the span in PDF page space (y grows upward).
#[derive(Debug, Clone, PartialEq)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// One drawing instruction on a page. The paginator emits exactly two kinds:
/// a title (cover or section heading, possibly carrying the continuation
/// suffix) and a body line.
#[derive(Debug, Clone, PartialEq)]
pub enum PageItem {
    Title(SpanLayout),
    Line(SpanLayout),
}

impl PageItem {
    /// The span behind the instruction, whichever kind it is.
    pub fn span(&self) -> &SpanLayout {
        match self {
            PageItem::Title(span) => span,
            PageItem::Line(span) => span,
        }
    }
}

/// A finished page: its boxes plus the ordered drawing instructions the
/// paginator placed on it. Pages are only ever constructed by the paginator;
/// once the run's [`Document`](crate::Document) is returned they are
/// read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content lives, i.e. within the margins
    pub content_box: Rect,
    items: Vec<PageItem>,
}

impl Page {
    pub(crate) fn new(size: PageSize, margins: &Margins) -> Page {
        let (width, height) = size;
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            items: Vec::default(),
        }
    }

    pub(crate) fn add_title(&mut self, span: SpanLayout) {
        self.items.push(PageItem::Title(span));
    }

    pub(crate) fn add_line(&mut self, span: SpanLayout) {
        self.items.push(PageItem::Line(span));
    }

    /// All drawing instructions, in emission order.
    pub fn items(&self) -> &[PageItem] {
        &self.items
    }

    /// The page's first title, if it has one. Continuation pages carry the
    /// originating block's title with the continuation suffix appended.
    pub fn title(&self) -> Option<&SpanLayout> {
        self.items.iter().find_map(|item| match item {
            PageItem::Title(span) => Some(span),
            _ => None,
        })
    }

    /// The body lines on this page, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &SpanLayout> {
        self.items.iter().filter_map(|item| match item {
            PageItem::Line(span) => Some(span),
            _ => None,
        })
    }
}
