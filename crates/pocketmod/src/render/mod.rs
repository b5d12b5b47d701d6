//! PDF rendering modules for imposition
//!
//! This module handles the PDF-specific operations:
//! - Creating XObjects from source pages
//! - Reading inherited page attributes (MediaBox, Resources, Rotate)
//! - Deep copying PDF objects

mod xobject;

pub use xobject::{create_page_xobject, get_media_box, get_page_rotation};
