use lopdf::ObjectId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PocketModError {
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Input file is not a PDF: {}", .0.display())]
    NotPdf(PathBuf),
    #[error("Document has no pages")]
    EmptyDocument,
    #[error(
        "Page {page} is {width:.1} x {height:.1} pt, expected {expected_width:.1} x {expected_height:.1} pt"
    )]
    UnsupportedPageSize {
        /// One-based page number
        page: usize,
        width: f32,
        height: f32,
        expected_width: f32,
        expected_height: f32,
    },
    #[error("Page {page} has no MediaBox")]
    MissingMediaBox { page: usize },
    #[error("Page {page} is rotated by {degrees} degrees")]
    UnsupportedRotation { page: usize, degrees: i64 },
    #[error("Page {page} has a content stream encoded with {filter}, which cannot be decoded")]
    UnsupportedContentFilter { page: usize, filter: String },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PocketModError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Named sizes recognised when detecting a document's paper
    pub const STANDARD: [PaperSize; 5] = [
        PaperSize::A5,
        PaperSize::A4,
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::A3,
    ];

    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Dimensions in points with orientation applied
    pub fn dimensions_pt(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_with_orientation(orientation);
        (crate::constants::mm_to_pt(w), crate::constants::mm_to_pt(h))
    }
}

/// Rotation applied to a page when it is placed on the sheet.
///
/// The fold only ever needs pages upright or upside down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Clockwise180,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Clockwise180 => 180,
        }
    }
}

/// One page of the input document.
///
/// Pages are read once and never mutated; `id` is the handle used to pull
/// the page's content when the sheet is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page {
    /// Zero-based index in the source document
    pub index: usize,
    /// Object ID of the page dictionary in the source document
    pub id: ObjectId,
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
    /// Lower-left corner of the media box
    pub origin: (f32, f32),
}

/// Statistics about the imposition
#[derive(Debug, Clone, PartialEq)]
pub struct PocketModStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Number of output sheets (one per signature)
    pub output_sheets: usize,
    /// Number of blank pages added for padding
    pub blank_pages_added: usize,
}
