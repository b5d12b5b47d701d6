//! Reading and validating source pages

use crate::constants::pt_to_mm;
use crate::options::PocketModOptions;
use crate::render::{get_media_box, get_page_rotation};
use crate::types::*;
use lopdf::{Document, ObjectId};

/// Read every page of the source document, in order.
///
/// Fails with `EmptyDocument` when there are no pages and with
/// `UnsupportedPageSize` on the first page that doesn't match the
/// configured paper size. Pages turned with `/Rotate` are rejected since
/// the fold only turns pages by 180° about their own media box.
pub fn collect_pages(source: &Document, options: &PocketModOptions) -> Result<Vec<Page>> {
    let page_ids: Vec<_> = source.get_pages().into_values().collect();
    if page_ids.is_empty() {
        return Err(PocketModError::EmptyDocument);
    }

    let (expected_width, expected_height) = options.page_dimensions_pt();

    page_ids
        .into_iter()
        .enumerate()
        .map(|(index, id)| {
            let page = read_page(source, index, id)?;

            if !options.matches_page_size(page.width, page.height) {
                log::warn!(
                    "Page {} is {:.0} x {:.0} mm",
                    index + 1,
                    pt_to_mm(page.width),
                    pt_to_mm(page.height)
                );
                return Err(PocketModError::UnsupportedPageSize {
                    page: index + 1,
                    width: page.width,
                    height: page.height,
                    expected_width,
                    expected_height,
                });
            }

            Ok(page)
        })
        .collect()
}

/// Paper size of the document's first page.
///
/// Known sizes within `tolerance_pt` are reported by name, anything else as
/// `PaperSize::Custom`. A landscape first page is rejected: the output sheet
/// is the input paper turned to landscape, which needs portrait pages.
pub fn detect_paper_size(source: &Document, tolerance_pt: f32) -> Result<PaperSize> {
    let Some(id) = source.get_pages().into_values().next() else {
        return Err(PocketModError::EmptyDocument);
    };
    let page = read_page(source, 0, id)?;

    if page.width > page.height + tolerance_pt {
        return Err(PocketModError::UnsupportedPageSize {
            page: 1,
            width: page.width,
            height: page.height,
            expected_width: page.height,
            expected_height: page.width,
        });
    }

    let matches = |size: PaperSize| {
        let (width, height) = size.dimensions_pt(Orientation::Portrait);
        (page.width - width).abs() <= tolerance_pt && (page.height - height).abs() <= tolerance_pt
    };

    let size = PaperSize::STANDARD
        .into_iter()
        .find(|&size| matches(size))
        .unwrap_or(PaperSize::Custom {
            width_mm: pt_to_mm(page.width),
            height_mm: pt_to_mm(page.height),
        });
    log::debug!("Detected paper size {:?} from page 1", size);
    Ok(size)
}

fn read_page(source: &Document, index: usize, id: ObjectId) -> Result<Page> {
    let [llx, lly, urx, ury] =
        get_media_box(source, id)?.ok_or(PocketModError::MissingMediaBox { page: index + 1 })?;

    let degrees = get_page_rotation(source, id)?;
    if degrees != 0 {
        return Err(PocketModError::UnsupportedRotation {
            page: index + 1,
            degrees,
        });
    }

    Ok(Page {
        index,
        id,
        width: urx - llx,
        height: ury - lly,
        origin: (llx, lly),
    })
}
