//! The pocketmod fold table
//!
//! A pocketmod is one landscape sheet cut once along the middle and folded
//! into an 8-page booklet. The sheet holds a 4 × 2 grid of cells. Slots are
//! numbered row-major, so slots 0–3 are the top row and 4–7 the bottom row:
//!
//! ```text
//! +----+----+----+----+
//! |  2 |  3 |  4 |  5 |   upright
//! +----+----+----+----+
//! | 1↓ | 8↓ | 7↓ | 6↓ |   rotated 180°
//! +----+----+----+----+
//! ```
//!
//! Numbers are page numbers within the signature (1-based).

use crate::constants::{GRID_COLS, PAGES_PER_SIGNATURE};
use crate::types::Rotation;

use super::GridPosition;

/// One row of the fold table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldEntry {
    /// Position of the page within its signature (0-based)
    pub position: usize,
    /// Destination slot on the sheet
    pub slot: usize,
    /// Rotation applied to the page
    pub rotation: Rotation,
}

impl FoldEntry {
    const fn new(position: usize, slot: usize, rotation: Rotation) -> Self {
        Self {
            position,
            slot,
            rotation,
        }
    }

    /// Grid cell of this entry's slot
    pub fn grid_pos(&self) -> GridPosition {
        slot_grid_position(self.slot)
    }
}

/// Position within signature → (slot, rotation), indexed by position.
pub const POCKETMOD_FOLD_TABLE: [FoldEntry; PAGES_PER_SIGNATURE] = [
    FoldEntry::new(0, 4, Rotation::Clockwise180), // front cover
    FoldEntry::new(1, 0, Rotation::None),
    FoldEntry::new(2, 1, Rotation::None),
    FoldEntry::new(3, 2, Rotation::None),
    FoldEntry::new(4, 3, Rotation::None),
    FoldEntry::new(5, 7, Rotation::Clockwise180),
    FoldEntry::new(6, 6, Rotation::Clockwise180),
    FoldEntry::new(7, 5, Rotation::Clockwise180), // back cover
];

/// Look up the fold entry for a position within a signature.
///
/// # Panics
/// If `position` is not below [`PAGES_PER_SIGNATURE`].
pub fn fold_entry(position: usize) -> FoldEntry {
    POCKETMOD_FOLD_TABLE[position]
}

/// Grid cell of a slot
pub fn slot_grid_position(slot: usize) -> GridPosition {
    GridPosition::new(slot / GRID_COLS, slot % GRID_COLS)
}

/// Fold table entries ordered by destination slot.
pub fn entries_by_slot() -> [FoldEntry; PAGES_PER_SIGNATURE] {
    let mut entries = POCKETMOD_FOLD_TABLE;
    entries.sort_by_key(|entry| entry.slot);
    entries
}

// =============================================================================
// Tests
// =============================================================================
