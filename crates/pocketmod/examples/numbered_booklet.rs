//! Writes a numbered A4 document and its pocketmod imposition.
//!
//! Print `numbered_booklet_imposed.pdf`, cut and fold, and the booklet
//! should read 1 to 8 (and 9 on the second sheet's cover).

use lopdf::{Dictionary, Document, Object, Stream};
use pocketmod::*;

fn create_numbered_pdf(num_pages: usize) -> Document {
    let (width, height) = PaperSize::A4.dimensions_pt(Orientation::Portrait);

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(b"Helvetica".to_vec()));
    let font_id = doc.add_object(font_dict);

    let mut kids = Vec::new();
    for page_num in 1..=num_pages {
        // Big page number plus a frame so orientation is obvious
        let content = format!(
            "4 w 20 20 {} {} re S BT /F1 300 Tf 180 320 Td ({}) Tj ET",
            width - 40.0,
            height - 40.0,
            page_num
        );
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let mut font_resources = Dictionary::new();
        font_resources.set("F1", Object::Reference(font_id));
        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(font_resources));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(width),
                    Object::Real(height),
                ]),
            ),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);
    doc
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let source_doc = create_numbered_pdf(9);

    save_pdf(source_doc.clone(), "numbered_booklet_source.pdf").await?;
    println!("Created numbered_booklet_source.pdf with 9 numbered pages");

    let options = PocketModOptions::for_document(&source_doc)?;
    let imposed = impose(&source_doc, &options)?;
    save_pdf(imposed, "numbered_booklet_imposed.pdf").await?;
    println!("Created numbered_booklet_imposed.pdf");
    println!("\nExpected layout (sheet 1):");
    println!("  Top row:    2, 3, 4, 5");
    println!("  Bottom row: 1, 8, 7, 6 (rotated 180°)");
    println!("Sheet 2 holds page 9 bottom-left and seven blanks.");

    Ok(())
}
