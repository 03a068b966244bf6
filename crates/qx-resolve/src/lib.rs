//! QX Resolution Engine
//!
//! Walks the positional structure of a QX matrix: from a defect name to
//! its column, to the sub-assemblies linked by `ç`, to their marked
//! components, to the corrective parameters those components carry, and
//! finally through the colour filter that keeps only components validated
//! for the defect.
//!
//! # Architecture
//!
//! ```text
//! locate ──> sub-assemblies ──┬──> components ──┐
//!                             └──> parameters ──┴──> colour filter ──> hierarchy
//! ```
//!
//! Every resolver is total. A missing defect is an ordinary outcome
//! ([`ResolveError::DefectNotFound`] from [`analyze`], an empty
//! [`FilteredHierarchy`] from [`filtered_hierarchy`]), and a degraded
//! colour source yields an empty validated list, never an error.
//!
//! # Example
//!
//! ```rust
//! use qx_matrix::{layout, GridBuilder};
//! use qx_resolve::MatrixSession;
//!
//! let grid = GridBuilder::new()
//!     .with(layout::DEFECT_ROW, 80, "Crack")
//!     .with(5, 80, "ç")
//!     .with(5, layout::SUB_ASSEMBLY_LABEL_COLUMN, "Housing")
//!     .build();
//!
//! let session = MatrixSession::new(grid);
//! let analysis = session.analyze("crack").unwrap();
//! assert_eq!(analysis.defect_column, 80);
//! assert_eq!(analysis.sub_assemblies, vec!["Housing".to_string()]);
//!
//! let missing = session.filtered_hierarchy("Corrosion");
//! assert!(missing.is_empty());
//! assert_eq!(missing.defect_column, None);
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod color_filter;
pub mod component;
pub mod error;
pub mod hierarchy;
pub mod locator;
pub mod parameter;
pub mod session;
pub mod sub_assembly;

// Re-exports for convenience
pub use color_filter::{filter_validated_components, ColorFilterOutcome, ColorMemo, MemoStats};
pub use component::{find_sub_assembly_row, linked_component_columns, resolve_components};
pub use error::{ResolveError, ResolveResult};
pub use hierarchy::{
    analyze, filtered_hierarchy, report, ColorStatus, DefectAnalysis, FilteredHierarchy,
    HierarchyReport,
};
pub use locator::{list_all, locate, search, DefectEntry};
pub use parameter::{resolve_parameters, Parameter};
pub use session::{CachedColorSource, MatrixSession, SessionOptions};
pub use sub_assembly::resolve_sub_assemblies;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for running queries
    pub use crate::{
        DefectAnalysis, DefectEntry, FilteredHierarchy, HierarchyReport, MatrixSession, Parameter,
        ResolveError, SessionOptions,
    };
    pub use qx_matrix::{CellColorTable, ColorKey, ColorLookup, ColorSource, Grid, NoColor};
}
