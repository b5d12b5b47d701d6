use crate::constants::DEFAULT_SIZE_TOLERANCE_PT;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pocketmod configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PocketModOptions {
    /// The one paper size every input page must have. The output sheet is
    /// the same paper turned to landscape.
    pub paper_size: PaperSize,
    /// Allowed difference between a page's size and `paper_size`, in points
    pub size_tolerance_pt: f32,
}

impl Default for PocketModOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            size_tolerance_pt: DEFAULT_SIZE_TOLERANCE_PT,
        }
    }
}

impl PocketModOptions {
    /// Default options with the paper size taken from the document's first
    /// page. Every later page must then have the same size.
    pub fn for_document(source: &lopdf::Document) -> Result<Self> {
        let tolerance = DEFAULT_SIZE_TOLERANCE_PT;
        Ok(Self {
            paper_size: crate::impose::detect_paper_size(source, tolerance)?,
            size_tolerance_pt: tolerance,
        })
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| PocketModError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PocketModError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let (width_mm, height_mm) = self.paper_size.dimensions_mm();
        if !(width_mm.is_finite() && height_mm.is_finite()) || width_mm <= 0.0 || height_mm <= 0.0
        {
            return Err(PocketModError::Config(format!(
                "Paper dimensions must be positive, got {} x {} mm",
                width_mm, height_mm
            )));
        }

        if !self.size_tolerance_pt.is_finite() || self.size_tolerance_pt < 0.0 {
            return Err(PocketModError::Config(format!(
                "Size tolerance must be a non-negative number of points, got {}",
                self.size_tolerance_pt
            )));
        }

        Ok(())
    }

    /// Expected portrait page size in points
    pub fn page_dimensions_pt(&self) -> (f32, f32) {
        self.paper_size.dimensions_pt(Orientation::Portrait)
    }

    /// Output sheet size in points: the same paper, landscape
    pub fn sheet_dimensions_pt(&self) -> (f32, f32) {
        self.paper_size.dimensions_pt(Orientation::Landscape)
    }

    /// Whether a page of the given size matches the configured paper
    pub fn matches_page_size(&self, width_pt: f32, height_pt: f32) -> bool {
        let (expected_width, expected_height) = self.page_dimensions_pt();
        (width_pt - expected_width).abs() <= self.size_tolerance_pt
            && (height_pt - expected_height).abs() <= self.size_tolerance_pt
    }
}
