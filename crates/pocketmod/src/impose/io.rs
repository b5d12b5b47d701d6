//! Document I/O operations for imposition

use crate::constants::{OUTPUT_TIMESTAMP_FORMAT, PARTIAL_FILE_EXTENSION};
use crate::types::*;
use chrono::{DateTime, TimeZone};
use lopdf::Document;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Check that the input path is an existing PDF file.
pub fn check_input_path(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(PocketModError::FileNotFound(path.to_owned()));
    }

    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(PocketModError::NotPdf(path.to_owned()));
    }

    Ok(())
}

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(PocketModError::FileNotFound(path));
        }
        Err(e) => return Err(e.into()),
    };
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    log::info!("Loaded {} ({} pages)", path.display(), doc.get_pages().len());
    Ok(doc)
}

/// Save the imposed document.
///
/// The document is serialized in memory and written to a `.part` sibling
/// which is renamed over `path` once complete, so `path` never holds a
/// partial file. The partial file is removed if anything fails.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, PocketModError>(writer)
    })
    .await??;

    let partial = partial_path(&path);
    let written = async {
        tokio::fs::write(&partial, &bytes).await?;
        tokio::fs::rename(&partial, &path).await
    }
    .await;

    if let Err(e) = written {
        if let Err(cleanup) = tokio::fs::remove_file(&partial).await {
            if cleanup.kind() != ErrorKind::NotFound {
                log::warn!(
                    "Could not remove partial file {}: {}",
                    partial.display(),
                    cleanup
                );
            }
        }
        return Err(e.into());
    }

    log::info!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Name of the output file for a run started at `timestamp`:
/// `output_<YYYYMMDDHHMMSS>.pdf`.
pub fn output_file_name<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("output_{}.pdf", timestamp.format(OUTPUT_TIMESTAMP_FORMAT))
}

/// `output.pdf` -> `output.pdf.part`
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(PARTIAL_FILE_EXTENSION);
    path.with_file_name(name)
}

// =============================================================================
// Tests
// =============================================================================
