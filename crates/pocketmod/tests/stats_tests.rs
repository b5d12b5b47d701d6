use lopdf::{Dictionary, Document, Object, Stream};
use pocketmod::*;

fn create_test_document(num_pages: usize) -> Document {
    let mut doc = Document::with_version("1.7");

    // Create page tree root ID
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for _ in 0..num_pages {
        let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(595),
                    Object::Integer(842),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
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

#[test]
fn test_stats_no_pages() {
    let doc = create_test_document(0);
    let result = calculate_statistics(&doc);
    assert!(matches!(result, Err(PocketModError::EmptyDocument)));
}

#[test]
fn test_stats_single_page() {
    let stats = calculate_statistics(&create_test_document(1)).unwrap();

    assert_eq!(stats.source_pages, 1);
    assert_eq!(stats.output_sheets, 1);
    assert_eq!(stats.blank_pages_added, 7);
}

#[test]
fn test_stats_exact_signature() {
    let stats = calculate_statistics(&create_test_document(8)).unwrap();

    assert_eq!(stats.source_pages, 8);
    assert_eq!(stats.output_sheets, 1);
    // No padding for a whole signature
    assert_eq!(stats.blank_pages_added, 0);
}

#[test]
fn test_stats_nine_pages() {
    let stats = calculate_statistics(&create_test_document(9)).unwrap();

    assert_eq!(stats.source_pages, 9);
    // 9 pages padded to 16 (2 signatures of 8 pages each)
    assert_eq!(stats.output_sheets, 2);
    assert_eq!(stats.blank_pages_added, 7);
}

#[test]
fn test_stats_sheets_are_ceiling() {
    for n in 1..=64 {
        let stats = statistics_for_page_count(n).unwrap();
        assert_eq!(stats.output_sheets, n.div_ceil(8), "n = {}", n);
        assert_eq!(
            stats.source_pages + stats.blank_pages_added,
            stats.output_sheets * 8
        );
        assert!(stats.blank_pages_added < 8);
    }
}

#[test]
fn test_stats_match_imposed_document() {
    let doc = create_test_document(13);
    let stats = calculate_statistics(&doc).unwrap();

    let options = PocketModOptions {
        size_tolerance_pt: 1.0,
        ..Default::default()
    };
    let output = impose(&doc, &options).unwrap();
    assert_eq!(output.get_pages().len(), stats.output_sheets);
}
