//! QX Result Export
//!
//! Renders defect lists and hierarchies for people and for other tools:
//!
//! - [`write_defects_csv`]: the defect list as a one-column CSV
//! - [`write_hierarchy_csv`]: a filtered hierarchy as `section,name,value,components` rows
//! - [`to_json`]: any result structure as JSON
//! - [`render_text_report`]: the four-section plain-text report

#![warn(unreachable_pub)]

mod csv_export;
mod error;
mod report;

pub use csv_export::{
    defects_to_csv, hierarchy_to_csv, write_defects_csv, write_hierarchy_csv, DEFECTS_HEADER,
};
pub use error::{ExportError, ExportResult};
pub use report::render_text_report;

use serde::Serialize;

/// Serialize a result structure as JSON
///
/// # Errors
///
/// [`ExportError::Json`] if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> ExportResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
