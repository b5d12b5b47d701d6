//! Shared constants for pocketmod imposition
//!
//! This module centralizes magic numbers and constants used throughout
//! the imposition process.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Sheet Geometry
// =============================================================================

/// Source pages folded into one booklet
pub const PAGES_PER_SIGNATURE: usize = 8;

/// Columns of cells on the (landscape) output sheet
pub const GRID_COLS: usize = 4;

/// Rows of cells on the output sheet
pub const GRID_ROWS: usize = 2;

// =============================================================================
// Validation
// =============================================================================

/// Default allowed difference between a page's size and the configured
/// paper size, in points. Matches rounding to whole millimetres.
pub const DEFAULT_SIZE_TOLERANCE_PT: f32 = 1.0;

// =============================================================================
// Output
// =============================================================================

/// PDF version written to the output document
pub const OUTPUT_PDF_VERSION: &str = "1.7";

/// `chrono` format for the timestamp in output file names
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Extension appended to the output path while it is being written
pub const PARTIAL_FILE_EXTENSION: &str = "part";
