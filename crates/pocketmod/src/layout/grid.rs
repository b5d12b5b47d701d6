//! Grid layout calculation
//!
//! This module handles the geometric layout of the page grid on a sheet.

use crate::constants::{GRID_COLS, GRID_ROWS};

use super::{GridPosition, Rect, SheetGrid};

// =============================================================================
// Grid Creation
// =============================================================================

/// Create the pocketmod grid for an output sheet.
///
/// # Arguments
/// * `sheet_width_pt` - Output sheet width in points (landscape)
/// * `sheet_height_pt` - Output sheet height in points
pub fn create_sheet_grid(sheet_width_pt: f32, sheet_height_pt: f32) -> SheetGrid {
    SheetGrid {
        cols: GRID_COLS,
        rows: GRID_ROWS,
        cell_width_pt: sheet_width_pt / GRID_COLS as f32,
        cell_height_pt: sheet_height_pt / GRID_ROWS as f32,
    }
}

// =============================================================================
// Cell Calculations
// =============================================================================

/// Calculate the bounds of a cell at the given grid position.
///
/// Row 0 is the top of the sheet; PDF space grows upward, so the y
/// coordinate is inverted.
pub fn cell_bounds(grid: &SheetGrid, pos: GridPosition) -> Rect {
    let cell_x = pos.col as f32 * grid.cell_width_pt;
    let cell_y = (grid.rows - pos.row - 1) as f32 * grid.cell_height_pt;

    Rect::new(cell_x, cell_y, grid.cell_width_pt, grid.cell_height_pt)
}

// =============================================================================
// Tests
// =============================================================================
