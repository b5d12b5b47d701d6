//! Content placement within cells
//!
//! Every page is scaled uniformly to fit its cell and centred in it.
//! Rotation does not move the content rect: a page turned 180° about its
//! centre still fills the same area.

use crate::types::{Page, Rotation};

use super::{PagePlacement, Rect};

/// Calculate the scale that fits a source page into a cell while
/// preserving its aspect ratio.
pub fn fit_scale(source_width: f32, source_height: f32, cell: &Rect) -> f32 {
    if source_width <= 0.0 || source_height <= 0.0 {
        return 1.0;
    }
    (cell.width / source_width).min(cell.height / source_height)
}

/// Calculate the placement of a page within a cell.
///
/// Blank padding pages are placed as if they had the size of the real
/// pages so every placement carries a meaningful rect.
///
/// # Arguments
/// * `cell` - The cell bounds
/// * `page_size` - Width and height of the page in points
/// * `source_page` - Source page index (None = blank)
/// * `position` - Position of the page within its signature
/// * `slot` - Destination slot
/// * `rotation` - Rotation from the fold table
pub fn place_page(
    cell: &Rect,
    page_size: (f32, f32),
    source_page: Option<usize>,
    position: usize,
    slot: usize,
    rotation: Rotation,
) -> PagePlacement {
    let (source_width, source_height) = page_size;
    let scale = fit_scale(source_width, source_height, cell);

    let scaled_width = source_width * scale;
    let scaled_height = source_height * scale;

    let x = cell.x + (cell.width - scaled_width) / 2.0;
    let y = cell.y + (cell.height - scaled_height) / 2.0;

    PagePlacement {
        source_page,
        position,
        slot,
        rotation,
        cell: *cell,
        content_rect: Rect::new(x, y, scaled_width, scaled_height),
        scale,
    }
}

/// Build the PDF `cm` operands placing a page into its content rect.
///
/// Returns `[a, b, c, d, e, f]`. The page's media box origin is shifted to
/// the rect corner; for 180° the page is flipped about both axes and
/// anchored at the opposite corner.
pub fn placement_matrix(placement: &PagePlacement, page: &Page) -> [f32; 6] {
    let rect = &placement.content_rect;
    let scale = placement.scale;
    let (origin_x, origin_y) = page.origin;

    match placement.rotation {
        Rotation::None => [
            scale,
            0.0,
            0.0,
            scale,
            rect.x - scale * origin_x,
            rect.y - scale * origin_y,
        ],
        Rotation::Clockwise180 => [
            -scale,
            0.0,
            0.0,
            -scale,
            rect.right() + scale * origin_x,
            rect.top() + scale * origin_y,
        ],
    }
}

// =============================================================================
// Tests
// =============================================================================
