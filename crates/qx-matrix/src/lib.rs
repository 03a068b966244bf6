//! QX Matrix Model
//!
//! The read-only foundation every resolver works from.
//!
//! # Core Concepts
//!
//! - [`Grid`]: immutable 2-D table of trimmed, optional cell strings
//! - [`layout`]: the fixed row/column contract of the QX matrix family
//! - [`Marker`]: the closed set of single-character relationship sentinels
//! - [`ColorSource`]: best-effort `(row label, column) -> colour` capability
//!
//! # Example
//!
//! ```rust
//! use qx_matrix::{layout, GridBuilder, Marker, MarkerClass};
//!
//! let grid = GridBuilder::new()
//!     .with(layout::DEFECT_ROW, 80, "Crack")
//!     .with(5, 80, Marker::CCedilla.as_str())
//!     .with(5, layout::SUB_ASSEMBLY_LABEL_COLUMN, "Housing")
//!     .build();
//!
//! assert_eq!(grid.cell(layout::DEFECT_ROW, 80), Some("Crack"));
//! assert!(MarkerClass::DefectLink.matches(grid.cell(5, 80)));
//! // Out-of-bounds reads are simply absent
//! assert_eq!(grid.cell(500, 500), None);
//! ```

#![warn(unreachable_pub)]

mod error;
mod grid;
mod marker;

pub mod color;
pub mod layout;

// Re-exports
pub use color::{
    CellColor, CellColorEntry, CellColorTable, ColorKey, ColorLookup, ColorSource, FnColorSource,
    LabelledColorSource, NoColor,
};
pub use error::MatrixError;
pub use grid::{normalize_cell, Grid, GridBuilder};
pub use marker::{is_marker_text, Marker, MarkerClass};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
