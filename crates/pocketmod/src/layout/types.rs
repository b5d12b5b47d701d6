//! Layout data types for imposition
//!
//! These types represent the intermediate layout calculations between
//! signature ordering and PDF rendering.

use crate::types::Rotation;

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Grid of cells covering the output sheet
///
/// The pocketmod sheet has no margins: the cells tile the whole page.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGrid {
    /// Number of columns in the page grid
    pub cols: usize,
    /// Number of rows in the page grid
    pub rows: usize,
    /// Width of each cell in points
    pub cell_width_pt: f32,
    /// Height of each cell in points
    pub cell_height_pt: f32,
}

impl SheetGrid {
    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Sheet width covered by the grid
    pub fn width_pt(&self) -> f32 {
        self.cols as f32 * self.cell_width_pt
    }

    /// Sheet height covered by the grid
    pub fn height_pt(&self) -> f32 {
        self.rows as f32 * self.cell_height_pt
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// Final placement of a source page on the output sheet
///
/// This is the result of all layout calculations and contains
/// everything needed to render the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlacement {
    /// Source page index (None = blank padding)
    pub source_page: Option<usize>,
    /// Position of the page within its signature (0..8)
    pub position: usize,
    /// Destination slot on the sheet (0..8, row-major)
    pub slot: usize,
    /// Rotation applied to the page
    pub rotation: Rotation,
    /// The cell this slot occupies
    pub cell: Rect,
    /// Position and size of the scaled page content in points
    pub content_rect: Rect,
    /// Scale factor applied to the source page
    pub scale: f32,
}

impl PagePlacement {
    pub fn is_blank(&self) -> bool {
        self.source_page.is_none()
    }
}

/// One physical output page: the eight placements of one signature
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSheet {
    /// Index of the signature this sheet was built from
    pub signature: usize,
    /// Placements in slot order (slot 0 first)
    pub placements: Vec<PagePlacement>,
}

impl OutputSheet {
    /// Number of placements carrying real content
    pub fn content_pages(&self) -> usize {
        self.placements.iter().filter(|p| !p.is_blank()).count()
    }
}
