//! Pocketmod imposition
//!
//! This module orchestrates the imposition process:
//! 1. Read and validate the source pages
//! 2. Group them into signatures of eight and lay each out on a sheet
//! 3. Render the sheets into a new document

mod io;
mod pages;
mod sheet;

pub use io::{check_input_path, load_pdf, output_file_name, save_pdf};
pub use pages::{collect_pages, detect_paper_size};

use crate::constants::OUTPUT_PDF_VERSION;
use crate::layout::{OutputSheet, create_sheet_grid, plan_sheets};
use crate::options::PocketModOptions;
use crate::types::*;
use lopdf::{Document, Object};
use sheet::{finalize_document, render_sheet};
use std::collections::HashMap;

/// Impose a document into pocketmod sheets.
///
/// Pure transform: the source is not modified and the same input always
/// yields the same output document.
pub fn impose(source: &Document, options: &PocketModOptions) -> Result<Document> {
    options.validate()?;

    let pages = collect_pages(source, options)?;
    let sheets = plan_document(&pages, options);
    let sheet_size = options.sheet_dimensions_pt();

    let mut output = Document::with_version(OUTPUT_PDF_VERSION);
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::with_capacity(sheets.len());
    let mut cache = HashMap::new();

    for sheet in &sheets {
        let page_id = render_sheet(
            &mut output,
            source,
            &pages,
            sheet,
            sheet_size,
            pages_tree_id,
            &mut cache,
        )?;
        log::debug!(
            "Sheet {}: {} pages, {} blank",
            sheet.signature + 1,
            sheet.content_pages(),
            sheet.placements.len() - sheet.content_pages()
        );
        page_refs.push(Object::Reference(page_id));
    }

    finalize_document(&mut output, pages_tree_id, page_refs);
    log::info!("Imposed {} pages onto {} sheets", pages.len(), sheets.len());
    Ok(output)
}

/// Compute the sheet layouts for a set of validated pages.
pub fn plan_document(pages: &[Page], options: &PocketModOptions) -> Vec<OutputSheet> {
    let (sheet_width, sheet_height) = options.sheet_dimensions_pt();
    let grid = create_sheet_grid(sheet_width, sheet_height);
    plan_sheets(pages, &grid, options.page_dimensions_pt())
}
