//! Serializes a laid-out [Document] into PDF bytes.
//!
//! The paginator only produces positioned text spans, so the renderer's job
//! is small: a catalog, a page tree, one Type1 font dictionary per base font
//! the document uses, and per page an object plus an uncompressed content
//! stream written operator by operator.

use std::io::Write;

use log::debug;
use pdf_writer::{Finish, Name, Pdf, Ref};

use crate::colour::Colour;
use crate::document::Document;
use crate::encoding;
use crate::error::Error;
use crate::font::BuiltinFont;
use crate::page::{Page, SpanFont};
use crate::refs::{ObjectReferences, RefType};

pub(crate) fn write_document<W: Write>(document: Document, mut w: W) -> Result<(), Error> {
    let fonts = collect_fonts(&document);

    let mut refs = ObjectReferences::new();
    let catalog_id = refs.gen(RefType::Catalog);
    let page_tree_id = refs.gen(RefType::PageTree);

    let mut pdf = Pdf::new();

    if let Some(info) = document.info() {
        info.write(&mut refs, &mut pdf);
    }

    let page_refs: Vec<Ref> = (0..document.page_count())
        .map(|i| refs.gen(RefType::Page(i)))
        .collect();
    pdf.pages(page_tree_id)
        .count(page_refs.len() as i32)
        .kids(page_refs);

    for (i, font) in fonts.iter().enumerate() {
        let id = refs.gen(RefType::Font(i));
        let mut type1 = pdf.type1_font(id);
        type1.base_font(Name(font.base_name().as_bytes()));
        type1.encoding_predefined(Name(b"WinAnsiEncoding"));
        type1.finish();
    }

    for (index, page) in document.pages().iter().enumerate() {
        write_page(page, index, &fonts, &mut refs, &mut pdf)?;
    }

    let mut catalog = pdf.catalog(catalog_id);
    catalog.pages(page_tree_id);
    catalog.finish();

    debug!(
        "rendered {} page(s) using {} base font(s)",
        document.page_count(),
        fonts.len()
    );

    w.write_all(&pdf.finish())?;
    Ok(())
}

/// The distinct base fonts the document draws with, in first-use order.
/// A font's position in this list is its resource slot (`/F0`, `/F1`, …) on
/// every page.
fn collect_fonts(document: &Document) -> Vec<BuiltinFont> {
    let mut fonts: Vec<BuiltinFont> = Vec::new();
    for page in document.pages() {
        for item in page.items() {
            let font = item.span().font.font;
            if !fonts.contains(&font) {
                fonts.push(font);
            }
        }
    }
    fonts
}

fn write_page(
    page: &Page,
    index: usize,
    fonts: &[BuiltinFont],
    refs: &mut ObjectReferences,
    pdf: &mut Pdf,
) -> Result<(), Error> {
    let id = refs.get(RefType::Page(index)).unwrap();
    let mut writer = pdf.page(id);
    writer.media_box(page.media_box.into());
    writer.art_box(page.content_box.into());
    writer.parent(refs.get(RefType::PageTree).unwrap());

    let mut resources = writer.resources();
    let mut resource_fonts = resources.fonts();
    for (i, _) in fonts.iter().enumerate() {
        resource_fonts.pair(
            Name(format!("F{i}").as_bytes()),
            refs.get(RefType::Font(i)).unwrap(),
        );
    }
    resource_fonts.finish();
    resources.finish();

    let content_id = refs.gen(RefType::ContentForPage(index));
    writer.contents(content_id);
    writer.finish();

    let content = render_contents(page, fonts)?;
    pdf.stream(content_id, content.as_slice());
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_contents(page: &Page, fonts: &[BuiltinFont]) -> Result<Vec<u8>, std::io::Error> {
    if page.items().is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();
    write!(&mut content, "q\n")?;

    let mut current_font: Option<SpanFont> = None;
    let mut current_colour: Option<Colour> = None;

    for item in page.items() {
        let span = item.span();

        if current_font != Some(span.font) {
            current_font = Some(span.font);
            let slot = fonts
                .iter()
                .position(|f| *f == span.font.font)
                .expect("span font was collected for this document");
            write!(&mut content, "/F{} {} Tf\n", slot, span.font.size)?;
        }
        if current_colour != Some(span.colour) {
            current_colour = Some(span.colour);
            write_colour(&mut content, span.colour)?;
        }

        write!(&mut content, "BT\n")?;
        write!(&mut content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        write_literal_string(&mut content, &span.text)?;
        write!(&mut content, " Tj\nET\n")?;
    }

    write!(&mut content, "Q\n")?;
    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::Rgb { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { level } => write!(content, "{level} g\n"),
    }
}

/// Writes `text` as a parenthesized literal string, lowered to WinAnsi
/// bytes. Parentheses and backslashes are escaped; bytes without a printable
/// representation use octal escapes.
fn write_literal_string(content: &mut Vec<u8>, text: &str) -> Result<(), std::io::Error> {
    content.push(b'(');
    for byte in encoding::encode_str(text) {
        match byte {
            b'(' | b')' | b'\\' => {
                content.push(b'\\');
                content.push(byte);
            }
            0x20..=0x7E | 0x80..=0xFF => content.push(byte),
            _ => write!(content, "\\{byte:03o}")?,
        }
    }
    content.push(b')');
    Ok(())
}
