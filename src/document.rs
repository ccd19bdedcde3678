use std::io::Write;

use crate::error::Error;
use crate::info::Info;
use crate::page::Page;
use crate::render;

/// The finished output of one paginator run: the ordered page list, plus
/// optional document metadata for the renderer. The layout itself is
/// immutable once the document is handed back; only the metadata block can
/// still be set before writing.
#[derive(Debug)]
pub struct Document {
    info: Option<Info>,
    pages: Vec<Page>,
}

impl Document {
    pub(crate) fn new(pages: Vec<Page>) -> Document {
        Document { info: None, pages }
    }

    /// Sets information about the document. If not provided, no information
    /// block will be written to the PDF.
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    pub fn info(&self) -> Option<&Info> {
        self.info.as_ref()
    }

    /// The laid-out pages, in document order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialize the document to `w` as a PDF. Note: the whole document is
    /// rendered in memory first, a limitation of the underlying pdf-writer
    /// implementation.
    pub fn write<W: Write>(self, w: W) -> Result<(), Error> {
        render::write_document(self, w)
    }
}
