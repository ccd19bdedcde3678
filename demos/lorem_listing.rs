//! Paginates lipsum filler across half-letter pages, exercising wrapping,
//! continuation pages, and page sharing between blocks.

use listing_pdf::layout::{Margins, PageGeometry, Paginator, TextBlock};
use listing_pdf::{pagesize, In};

fn main() {
    env_logger::init();

    let geometry = PageGeometry {
        page_size: pagesize::HALF_LETTER,
        margins: Margins::all(In(0.5)),
        max_chars: 48,
        ..PageGeometry::listing_letter()
    };
    let paginator = Paginator::new(geometry)
        .expect("geometry is valid")
        .with_cover("Lorem Ipsum", "filler text, wrapped and paginated");

    let blocks = [
        TextBlock::new("chapter-1.txt", lipsum::lipsum(220)),
        TextBlock::new("chapter-2.txt", lipsum::lipsum_words(160)),
    ];
    let document = paginator.paginate(&blocks);

    let mut out = std::fs::File::create("lorem-listing.pdf").expect("can create output file");
    document.write(&mut out).expect("can write PDF");
}
