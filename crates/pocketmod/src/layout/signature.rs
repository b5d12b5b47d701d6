//! Signature partitioning and sheet planning
//!
//! Source pages are grouped into consecutive runs of eight. The last
//! signature is padded with blank positions when the page count is not a
//! multiple of eight. Each signature is then laid out on one sheet using
//! the fold table.

use crate::constants::PAGES_PER_SIGNATURE;
use crate::types::Page;

use super::{OutputSheet, PagePlacement, SheetGrid, cell_bounds, entries_by_slot, place_page};

/// An ordered group of eight page positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    /// Zero-based signature index
    pub index: usize,
    /// Pages by position within the signature (None = blank padding)
    pub pages: [Option<Page>; PAGES_PER_SIGNATURE],
}

impl Signature {
    /// Index of the first source page in this signature
    pub fn first_page_index(&self) -> usize {
        self.index * PAGES_PER_SIGNATURE
    }

    /// Number of blank padding positions
    pub fn blank_count(&self) -> usize {
        self.pages.iter().filter(|p| p.is_none()).count()
    }
}

/// Number of signatures (and therefore sheets) needed for `page_count` pages
pub fn signature_count(page_count: usize) -> usize {
    page_count.div_ceil(PAGES_PER_SIGNATURE)
}

/// Number of blank pages needed to pad `page_count` to whole signatures
pub fn padding_count(page_count: usize) -> usize {
    signature_count(page_count) * PAGES_PER_SIGNATURE - page_count
}

/// Split pages into signatures of eight, preserving source order.
pub fn partition_signatures(pages: &[Page]) -> Vec<Signature> {
    pages
        .chunks(PAGES_PER_SIGNATURE)
        .enumerate()
        .map(|(index, chunk)| {
            let mut slots = [None; PAGES_PER_SIGNATURE];
            for (slot, page) in slots.iter_mut().zip(chunk) {
                *slot = Some(*page);
            }
            Signature {
                index,
                pages: slots,
            }
        })
        .collect()
}

/// Lay out one signature on a sheet.
///
/// Placements are returned in slot order. `page_size` is used for blank
/// positions, which still get a slot and rotation but draw nothing.
pub fn layout_signature(
    signature: &Signature,
    grid: &SheetGrid,
    page_size: (f32, f32),
) -> OutputSheet {
    let placements: Vec<PagePlacement> = entries_by_slot()
        .iter()
        .map(|entry| {
            let cell = cell_bounds(grid, entry.grid_pos());
            let page = signature.pages[entry.position];
            let size = page.map(|p| (p.width, p.height)).unwrap_or(page_size);
            place_page(
                &cell,
                size,
                page.map(|p| p.index),
                entry.position,
                entry.slot,
                entry.rotation,
            )
        })
        .collect();

    OutputSheet {
        signature: signature.index,
        placements,
    }
}

/// Plan every output sheet for a run.
pub fn plan_sheets(pages: &[Page], grid: &SheetGrid, page_size: (f32, f32)) -> Vec<OutputSheet> {
    partition_signatures(pages)
        .iter()
        .map(|signature| layout_signature(signature, grid, page_size))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::create_sheet_grid;
    use crate::types::Rotation;

    const PAGE: (f32, f32) = (100.0, 200.0);

    fn pages(count: usize) -> Vec<Page> {
        (0..count)
            .map(|index| Page {
                index,
                id: (index as u32 + 1, 0),
                width: PAGE.0,
                height: PAGE.1,
                origin: (0.0, 0.0),
            })
            .collect()
    }

    fn grid() -> SheetGrid {
        create_sheet_grid(400.0, 200.0)
    }

    #[test]
    fn test_signature_count() {
        assert_eq!(signature_count(0), 0);
        assert_eq!(signature_count(1), 1);
        assert_eq!(signature_count(8), 1);
        assert_eq!(signature_count(9), 2);
        assert_eq!(signature_count(16), 2);
        assert_eq!(signature_count(17), 3);
    }

    #[test]
    fn test_padding_count() {
        assert_eq!(padding_count(1), 7);
        assert_eq!(padding_count(8), 0);
        assert_eq!(padding_count(9), 7);
        assert_eq!(padding_count(15), 1);
    }

    #[test]
    fn test_sheet_count_matches_ceiling() {
        for n in 1..=40 {
            let sheets = plan_sheets(&pages(n), &grid(), PAGE);
            assert_eq!(sheets.len(), n.div_ceil(8), "n = {}", n);
        }
    }

    #[test]
    fn test_no_padding_for_whole_signatures() {
        for n in [8, 16, 24] {
            for signature in partition_signatures(&pages(n)) {
                assert_eq!(signature.blank_count(), 0);
            }
        }
    }

    #[test]
    fn test_partition_preserves_order() {
        let signatures = partition_signatures(&pages(11));
        assert_eq!(signatures.len(), 2);
        assert_eq!(signatures[1].first_page_index(), 8);
        assert_eq!(signatures[1].pages[0].map(|p| p.index), Some(8));
        assert_eq!(signatures[1].pages[2].map(|p| p.index), Some(10));
        assert_eq!(signatures[1].pages[3], None);
        assert_eq!(signatures[1].blank_count(), 5);
    }

    #[test]
    fn test_every_page_placed_exactly_once() {
        let n = 21;
        let sheets = plan_sheets(&pages(n), &grid(), PAGE);
        let mut used = vec![0; n];
        for sheet in &sheets {
            for placement in &sheet.placements {
                if let Some(idx) = placement.source_page {
                    used[idx] += 1;
                }
            }
        }
        assert!(used.iter().all(|&count| count == 1));
    }

    #[test]
    fn test_single_page_sheet() {
        let sheets = plan_sheets(&pages(1), &grid(), PAGE);
        assert_eq!(sheets.len(), 1);

        let sheet = &sheets[0];
        assert_eq!(sheet.placements.len(), 8);
        assert_eq!(sheet.content_pages(), 1);

        // Page 1 goes bottom-left, upside down
        let front = &sheet.placements[4];
        assert_eq!(front.source_page, Some(0));
        assert_eq!(front.rotation, Rotation::Clockwise180);
        assert_eq!(front.cell.x, 0.0);
        assert_eq!(front.cell.y, 0.0);

        // Blanks keep the table's rotation
        for placement in sheet.placements.iter().filter(|p| p.is_blank()) {
            let expected = if placement.slot < 4 {
                Rotation::None
            } else {
                Rotation::Clockwise180
            };
            assert_eq!(placement.rotation, expected);
        }
    }

    #[test]
    fn test_rotation_pattern_per_sheet() {
        for sheet in plan_sheets(&pages(24), &grid(), PAGE) {
            let degrees: Vec<i32> = sheet
                .placements
                .iter()
                .map(|p| p.rotation.degrees())
                .collect();
            assert_eq!(degrees, vec![0, 0, 0, 0, 180, 180, 180, 180]);
        }
    }

    #[test]
    fn test_sheet_source_order() {
        let sheets = plan_sheets(&pages(16), &grid(), PAGE);
        let order: Vec<Option<usize>> = sheets[1]
            .placements
            .iter()
            .map(|p| p.source_page)
            .collect();
        assert_eq!(
            order,
            vec![
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(8),
                Some(15),
                Some(14),
                Some(13)
            ]
        );
    }
}
