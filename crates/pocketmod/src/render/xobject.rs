//! XObject creation for imposition
//!
//! This module handles creating Form XObjects from source PDF pages,
//! which are then placed onto output sheets with transformations.

use crate::types::{Page, PocketModError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Page-tree nodes above a page are followed at most this deep when looking
/// for inherited attributes. Guards against cyclic `Parent` links.
const MAX_INHERITANCE_DEPTH: usize = 32;

// =============================================================================
// XObject Creation
// =============================================================================

/// Create an XObject from a source page.
///
/// Resources are deep-copied into the output. The cache maps source object
/// IDs to their copies so shared resources (fonts, images) are copied once
/// per output document.
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `source` - The source document containing the page
/// * `page` - The validated source page; its media box becomes the form's BBox
/// * `cache` - Cache to avoid copying the same object multiple times
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page: &Page,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page.id)?;

    let content = get_page_content(source, page_dict)
        .map_err(|e| match e {
            ContentError::Pdf(e) => PocketModError::Pdf(e),
            ContentError::Undecodable(filter) => PocketModError::UnsupportedContentFilter {
                page: page.index + 1,
                filter,
            },
        })?;

    let (llx, lly) = page.origin;
    let media_box = [llx, lly, llx + page.width, lly + page.height];

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set(
        "BBox",
        Object::Array(media_box.iter().map(|&v| Object::Real(v)).collect()),
    );
    xobject_dict.set("FormType", Object::Integer(1));

    if let Some(resources) = inherited_attribute(source, page.id, b"Resources")? {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, cache)?,
        );
    }

    let data = match content {
        PageContent::Plain(data) => data,
        PageContent::Encoded {
            data,
            filter,
            decode_parms,
        } => {
            xobject_dict.set("Filter", copy_object_deep(output, source, &filter, cache)?);
            if let Some(parms) = decode_parms {
                xobject_dict.set("DecodeParms", copy_object_deep(output, source, &parms, cache)?);
            }
            data
        }
    };

    Ok(output.add_object(Stream::new(xobject_dict, data)))
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Content of a page, ready to become the body of a Form XObject
#[derive(Debug)]
enum PageContent {
    /// Decoded content operators
    Plain(Vec<u8>),
    /// A single stream lopdf cannot decode, kept with its own filters
    Encoded {
        data: Vec<u8>,
        filter: Object,
        decode_parms: Option<Object>,
    },
}

#[derive(Debug)]
enum ContentError {
    Pdf(lopdf::Error),
    /// Names the filter chain of a stream that had to be decoded but can't be
    Undecodable(String),
}

impl From<lopdf::Error> for ContentError {
    fn from(e: lopdf::Error) -> Self {
        ContentError::Pdf(e)
    }
}

/// Get the content stream data from a page.
fn get_page_content(
    doc: &Document,
    page_dict: &Dictionary,
) -> std::result::Result<PageContent, ContentError> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(PageContent::Plain(Vec::new())), // No content = blank page
    };

    match contents {
        Object::Reference(id) => get_single_content_stream(doc, *id),
        Object::Array(arr) => get_concatenated_content_streams(doc, arr).map(PageContent::Plain),
        _ => Ok(PageContent::Plain(Vec::new())),
    }
}

/// Get content from a single content stream reference.
///
/// A stream whose filters lopdf can't decode is passed through untouched
/// along with its `Filter` and `DecodeParms`.
fn get_single_content_stream(
    doc: &Document,
    id: ObjectId,
) -> std::result::Result<PageContent, ContentError> {
    match doc.get_object(id)? {
        Object::Stream(stream) => Ok(match decode_stream(stream) {
            Ok(data) => PageContent::Plain(data),
            Err(_) => PageContent::Encoded {
                data: stream.content.clone(),
                filter: stream.dict.get(b"Filter")?.clone(),
                decode_parms: stream.dict.get(b"DecodeParms").ok().cloned(),
            },
        }),
        // Some writers wrap the stream array in an indirect object
        Object::Array(arr) => get_concatenated_content_streams(doc, arr).map(PageContent::Plain),
        _ => Ok(PageContent::Plain(Vec::new())),
    }
}

/// Concatenate multiple content streams.
///
/// Every part must be decodable: parts with different encodings can't share
/// one filter in the output.
fn get_concatenated_content_streams(
    doc: &Document,
    refs: &[Object],
) -> std::result::Result<Vec<u8>, ContentError> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            if let Ok(stream) = doc.get_object(*id)?.as_stream() {
                let content = decode_stream(stream)?;
                result.extend_from_slice(&content);
                result.push(b'\n');
            }
        }
    }

    Ok(result)
}

/// Decoded bytes of a stream. Unfiltered streams are returned as stored.
fn decode_stream(stream: &Stream) -> std::result::Result<Vec<u8>, ContentError> {
    if stream.dict.get(b"Filter").is_err() {
        return Ok(stream.content.clone());
    }

    stream
        .decompressed_content()
        .map_err(|_| ContentError::Undecodable(filter_description(stream)))
}

fn filter_description(stream: &Stream) -> String {
    match stream.filters() {
        Ok(names) => names
            .iter()
            .map(|name| String::from_utf8_lossy(name).into_owned())
            .collect::<Vec<_>>()
            .join(" "),
        Err(_) => "an unreadable Filter entry".to_string(),
    }
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// Uses a cache to avoid copying the same object multiple times.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Reserve the ID before copying so self-referencing objects
            // terminate
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                // Never drag a page tree in through a back-reference
                if key.as_slice() == b"Parent" {
                    continue;
                }
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(new_dict))
        }
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict: new_dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

// =============================================================================
// Page Attributes
// =============================================================================

/// Look up a page attribute, following `Parent` links for attributes
/// inherited from the page tree.
pub fn inherited_attribute<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<&'a Object>> {
    let mut node = doc.get_dictionary(page_id)?;

    for _ in 0..MAX_INHERITANCE_DEPTH {
        if let Ok(value) = node.get(key) {
            let value = match value {
                Object::Reference(id) => doc.get_object(*id)?,
                other => other,
            };
            return Ok(Some(value));
        }

        match node.get(b"Parent").and_then(Object::as_reference) {
            Ok(parent_id) => node = doc.get_dictionary(parent_id)?,
            Err(_) => return Ok(None),
        }
    }

    Ok(None)
}

/// Get a page's media box as `[llx, lly, urx, ury]`, normalised so the
/// first corner is the lower-left one.
///
/// Returns `None` if the page has no (valid) media box.
pub fn get_media_box(doc: &Document, page_id: ObjectId) -> Result<Option<[f32; 4]>> {
    let Some(Object::Array(values)) = inherited_attribute(doc, page_id, b"MediaBox")? else {
        return Ok(None);
    };

    if values.len() != 4 {
        return Ok(None);
    }

    let mut coords = [0.0; 4];
    for (coord, value) in coords.iter_mut().zip(values) {
        match extract_number(doc, value) {
            Some(v) => *coord = v,
            None => return Ok(None),
        }
    }

    let [x0, y0, x1, y1] = coords;
    Ok(Some([x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1)]))
}

/// The page's `/Rotate` value in degrees, normalised to `0..360`.
///
/// Pages without the key (on themselves or an ancestor) are upright.
pub fn get_page_rotation(doc: &Document, page_id: ObjectId) -> Result<i64> {
    let degrees = match inherited_attribute(doc, page_id, b"Rotate")? {
        Some(Object::Integer(degrees)) => *degrees,
        Some(Object::Real(degrees)) => *degrees as i64,
        _ => 0,
    };
    Ok(degrees.rem_euclid(360))
}

/// Extract numeric value from a PDF object
fn extract_number(doc: &Document, obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        Object::Reference(id) => match doc.get_object(*id).ok()? {
            Object::Integer(i) => Some(*i as f32),
            Object::Real(r) => Some(*r),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &[u8] = b"0 0 m 100 100 l S";

    fn hex_encoded(data: &[u8]) -> Vec<u8> {
        let mut hex: Vec<u8> = data
            .iter()
            .flat_map(|b| format!("{:02X}", b).into_bytes())
            .collect();
        hex.push(b'>');
        hex
    }

    fn hex_stream() -> Stream {
        let mut dict = Dictionary::new();
        dict.set("Filter", Object::Name(b"ASCIIHexDecode".to_vec()));
        Stream::new(dict, hex_encoded(CONTENT))
    }

    fn page_with_contents(contents: Object) -> Dictionary {
        Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Contents", contents),
        ])
    }

    #[test]
    fn test_unfiltered_stream_is_plain() {
        let mut doc = Document::with_version("1.7");
        let id = doc.add_object(Stream::new(Dictionary::new(), CONTENT.to_vec()));
        let page = page_with_contents(Object::Reference(id));

        match get_page_content(&doc, &page).unwrap() {
            PageContent::Plain(data) => assert_eq!(data, CONTENT),
            other => panic!("expected plain content, got {:?}", other),
        }
    }

    #[test]
    fn test_undecodable_single_stream_keeps_filter() {
        let mut doc = Document::with_version("1.7");
        let id = doc.add_object(hex_stream());
        let page = page_with_contents(Object::Reference(id));

        match get_page_content(&doc, &page).unwrap() {
            PageContent::Encoded {
                data,
                filter,
                decode_parms,
            } => {
                assert_eq!(data, hex_encoded(CONTENT));
                assert_eq!(filter.as_name().unwrap(), b"ASCIIHexDecode");
                assert!(decode_parms.is_none());
            }
            other => panic!("expected encoded content, got {:?}", other),
        }
    }

    #[test]
    fn test_undecodable_stream_in_array_is_an_error() {
        let mut doc = Document::with_version("1.7");
        let plain = doc.add_object(Stream::new(Dictionary::new(), b"q".to_vec()));
        let hex = doc.add_object(hex_stream());
        let page = page_with_contents(
            Object::Array(vec![Object::Reference(plain), Object::Reference(hex)]),
        );

        match get_page_content(&doc, &page) {
            Err(ContentError::Undecodable(filter)) => assert_eq!(filter, "ASCIIHexDecode"),
            other => panic!("expected undecodable content, got {:?}", other),
        }
    }

    #[test]
    fn test_page_rotation_normalised() {
        let mut doc = Document::with_version("1.7");
        let upright = doc.add_object(Dictionary::from_iter(vec![("Type", Object::Name(b"Page".to_vec()))]));
        let turned = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Rotate", Object::Integer(-90)),
        ]));

        assert_eq!(get_page_rotation(&doc, upright).unwrap(), 0);
        assert_eq!(get_page_rotation(&doc, turned).unwrap(), 270);
    }
}
