use crate::layout::{padding_count, signature_count};
use crate::types::*;
use lopdf::Document;

/// Calculate statistics for imposing `document`
pub fn calculate_statistics(document: &Document) -> Result<PocketModStatistics> {
    statistics_for_page_count(document.get_pages().len())
}

/// Calculate statistics for a given number of source pages
pub fn statistics_for_page_count(source_pages: usize) -> Result<PocketModStatistics> {
    if source_pages == 0 {
        return Err(PocketModError::EmptyDocument);
    }

    Ok(PocketModStatistics {
        source_pages,
        output_sheets: signature_count(source_pages),
        blank_pages_added: padding_count(source_pages),
    })
}
