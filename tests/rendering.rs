use listing_pdf::layout::{PageGeometry, Paginator, TextBlock};
use listing_pdf::Info;
use sha2::{Digest, Sha256};

fn sample_document() -> listing_pdf::Document {
    let paginator = Paginator::new(PageGeometry::listing_letter())
        .unwrap()
        .with_cover("Sample — Source", "rendering test");
    paginator.paginate(&[
        TextBlock::new("main.rs", "fn main() {\n    println!(\"hi\");\n}"),
        TextBlock::new("notes.txt", "LINE1\nLINE2"),
    ])
}

fn render(document: listing_pdf::Document) -> Vec<u8> {
    let mut bytes = Vec::new();
    document.write(&mut bytes).expect("rendering cannot fail in memory");
    bytes
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Zeroes the digits of the creation-date string so documents rendered at
/// different times can be compared.
fn scrub_creation_date(bytes: &mut [u8]) {
    let tag = b"/CreationDate(";
    let mut index = 0;
    while index + tag.len() < bytes.len() {
        if bytes[index..].starts_with(tag) {
            let mut cursor = index + tag.len();
            while cursor < bytes.len() && bytes[cursor] != b')' {
                bytes[cursor] = b'0';
                cursor += 1;
            }
            index = cursor;
        } else {
            index += 1;
        }
    }
}

#[test]
fn rendered_bytes_are_a_pdf() {
    let bytes = render(sample_document());
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(!bytes.is_empty());
}

#[test]
fn content_streams_carry_the_listing_text() {
    let bytes = render(sample_document());
    // streams are uncompressed, so span text is visible as literal strings
    assert!(contains(&bytes, b"(LINE1)"));
    assert!(contains(&bytes, b"(LINE2)"));
    assert!(contains(&bytes, b"(main.rs)"));
}

#[test]
fn parentheses_in_source_text_are_escaped() {
    let bytes = render(sample_document());
    assert!(contains(&bytes, b"(fn main\\(\\) {)"));
}

#[test]
fn non_ascii_text_is_lowered_to_winansi() {
    let bytes = render(sample_document());
    // the em dash of the cover title becomes WinAnsi byte 0x97
    assert!(contains(&bytes, b"(Sample \x97 Source)"));
}

#[test]
fn base_fonts_are_referenced_by_name() {
    let bytes = render(sample_document());
    assert!(contains(&bytes, b"/Courier"));
    assert!(contains(&bytes, b"/Helvetica-Bold"));
    assert!(contains(&bytes, b"/WinAnsiEncoding"));
}

#[test]
fn rendering_without_metadata_is_deterministic() {
    let first = render(sample_document());
    let second = render(sample_document());
    assert_eq!(Sha256::digest(&first), Sha256::digest(&second));
}

#[test]
fn rendering_is_deterministic_after_scrubbing_the_creation_date() {
    let render_with_info = || {
        let mut document = sample_document();
        document.set_info(Info::new().title("Sample").author("tests"));
        let mut bytes = render(document);
        scrub_creation_date(&mut bytes);
        bytes
    };

    let first = render_with_info();
    let second = render_with_info();
    assert_eq!(first.len(), second.len(), "PDF sizes should match");
    assert_eq!(Sha256::digest(&first), Sha256::digest(&second));
}
