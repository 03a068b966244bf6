//! QX Matrix Ingest
//!
//! Decodes workbooks (`.xls`, `.xlsx`, `.xlsb`, `.ods`) into a
//! [`qx_matrix::Grid`] and reads colour-table sidecars into a
//! [`qx_matrix::CellColorTable`].
//!
//! Worksheet coordinates are kept absolute: a used range that starts at
//! `B3` still places its first cell at row 2, column 1, so the fixed matrix
//! layout lines up regardless of leading blank rows.

#![warn(unreachable_pub)]

mod colors;
mod error;
mod options;
mod workbook;

pub use colors::{load_color_table, parse_color_table};
pub use error::{IngestError, IngestResult};
pub use options::{ImportOptions, SheetSelector};
pub use workbook::{cell_text, load_grid, load_grid_from_bytes};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
