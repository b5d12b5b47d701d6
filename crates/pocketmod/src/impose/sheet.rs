//! Sheet rendering for imposition

use crate::layout::{OutputSheet, placement_matrix};
use crate::render::create_page_xobject;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Render one output sheet to the output document.
///
/// Blank placements emit nothing. Each real page is drawn as a Form XObject
/// named after its slot (`/P0` … `/P7`).
pub(crate) fn render_sheet(
    output: &mut Document,
    source: &Document,
    pages: &[Page],
    sheet: &OutputSheet,
    sheet_size: (f32, f32),
    parent_pages_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let (sheet_width_pt, sheet_height_pt) = sheet_size;

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(sheet_width_pt),
            Object::Real(sheet_height_pt),
        ]),
    );

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();

    for placement in &sheet.placements {
        let Some(page) = placement.source_page.and_then(|idx| pages.get(idx)) else {
            continue;
        };

        let xobject_name = format!("P{}", placement.slot);
        let xobject_id = create_page_xobject(output, source, page, cache)?;
        log::trace!(
            "Page {} -> slot {} at {} degrees",
            page.index + 1,
            placement.slot,
            placement.rotation.degrees()
        );
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        let [a, b, c, d, e, f] = placement_matrix(placement, page);
        content_ops.push(format!(
            "q {} {} {} {} {} {} cm /{} Do Q\n",
            a, b, c, d, e, f, xobject_name
        ));
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Create pages tree and catalog, finalize document structure
pub(crate) fn finalize_document(
    output: &mut Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
) {
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}
