//! Layout calculation modules for imposition
//!
//! This module handles all the geometric calculations for page imposition:
//! - The fold table (which position goes in which slot, and its rotation)
//! - Grid layout (cell dimensions)
//! - Content placement (scaling, centring, transform)
//! - Signature partitioning and sheet planning

mod fold;
mod grid;
mod placement;
mod signature;
mod types;

pub use fold::*;
pub use grid::*;
pub use placement::*;
pub use signature::*;
pub use types::*;
