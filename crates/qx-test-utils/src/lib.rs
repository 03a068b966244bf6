//! Testing utilities for the QX matrix workspace
//!
//! Grid builders that speak in matrix terms, plus one shared scenario
//! matrix used across crates.
//!
//! # Scenario matrix
//!
//! ```text
//! defects (row 15):   80 Crack | 81 Surface scratch | 83 Leak
//! sub-assemblies:     row 5 Housing | row 7 Cover | row 13 Frame
//! defect links (ç):   (5,80) (7,80) (7,81)        Leak -> fallback Frame
//! components (row 15): 10 Bolt | 12 Gasket | 20 Washer | 30 Hinge | 40 Bolt
//! Housing markers:    10 ê, 12 ª, 20 è        -> Bolt, Gasket, Washer
//! Cover markers:      12 è, 30 ç, 40 ê        -> Gasket, Hinge, Bolt
//! Frame markers:      20 ê                    -> Washer
//! parameters:
//!   20 Torque       "Retighten to 10Nm"   (20,10) è
//!   21 Seal check   "Replace gasket"      (21,12) ê  (21,20) ª
//!   22 Hinge play   <no value>            (22,30) è  (22,40) è
//!   23 Orphan       "x"                   no markers
//!   24 <no name>                          (24,10) è
//!   25 Washer swap  "Replace washer"      (25,20) ê
//! ```
//!
//! [`scenario_colors`] paints Housing's row so Bolt (col 10) matches the
//! Crack reference, Cover's row so Hinge matches Crack and Gasket matches
//! Surface scratch. Frame has no colour at all.

#![allow(missing_docs)]

use qx_matrix::{layout, CellColorTable, ColorKey, Grid, GridBuilder, Marker};

pub const HOUSING_ROW: usize = 5;
pub const COVER_ROW: usize = 7;
pub const FRAME_ROW: usize = layout::FALLBACK_SUB_ASSEMBLY_ROW;

pub const CRACK_COLUMN: usize = 80;
pub const SCRATCH_COLUMN: usize = 81;
pub const LEAK_COLUMN: usize = 83;

/// Cell-by-cell builder using matrix vocabulary
#[derive(Debug, Clone, Default)]
pub struct MatrixFixture {
    builder: GridBuilder,
}

impl MatrixFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defect name in the defect row
    pub fn defect(mut self, column: usize, name: &str) -> Self {
        self.builder.set(layout::DEFECT_ROW, column, name);
        self
    }

    /// Sub-assembly label on `row`
    pub fn sub_assembly(mut self, row: usize, label: &str) -> Self {
        self.builder.set(row, layout::SUB_ASSEMBLY_LABEL_COLUMN, label);
        self
    }

    /// Component display name for `column`
    pub fn component(mut self, column: usize, name: &str) -> Self {
        self.builder.set(layout::COMPONENT_NAME_ROW, column, name);
        self
    }

    pub fn mark(mut self, row: usize, column: usize, marker: Marker) -> Self {
        self.builder.set(row, column, marker.as_str());
        self
    }

    /// Parameter name and (possibly blank) value on `row`
    pub fn parameter(mut self, row: usize, name: &str, value: &str) -> Self {
        self.builder.set(row, layout::PARAMETER_NAME_COLUMN, name);
        self.builder.set(row, layout::PARAMETER_VALUE_COLUMN, value);
        self
    }

    /// Raw cell escape hatch
    pub fn cell(mut self, row: usize, column: usize, value: &str) -> Self {
        self.builder.set(row, column, value);
        self
    }

    pub fn build(self) -> Grid {
        self.builder.build()
    }
}

pub fn scenario_fixture() -> MatrixFixture {
    MatrixFixture::new()
        .defect(CRACK_COLUMN, "Crack")
        .defect(SCRATCH_COLUMN, "Surface scratch")
        .cell(layout::DEFECT_ROW, 82, "   ")
        .defect(LEAK_COLUMN, "Leak")
        .sub_assembly(HOUSING_ROW, "Housing")
        .sub_assembly(COVER_ROW, "Cover")
        .sub_assembly(FRAME_ROW, "Frame")
        .mark(HOUSING_ROW, CRACK_COLUMN, Marker::CCedilla)
        .mark(COVER_ROW, CRACK_COLUMN, Marker::CCedilla)
        .mark(COVER_ROW, SCRATCH_COLUMN, Marker::CCedilla)
        .component(10, "Bolt")
        .component(12, "Gasket")
        .component(20, "Washer")
        .component(30, "Hinge")
        .component(40, "Bolt")
        .mark(HOUSING_ROW, 10, Marker::ECircumflex)
        .mark(HOUSING_ROW, 12, Marker::Ordinal)
        .mark(HOUSING_ROW, 20, Marker::EGrave)
        .mark(COVER_ROW, 12, Marker::EGrave)
        .mark(COVER_ROW, 30, Marker::CCedilla)
        .mark(COVER_ROW, 40, Marker::ECircumflex)
        .mark(FRAME_ROW, 20, Marker::ECircumflex)
        .parameter(20, "Torque", "Retighten to 10Nm")
        .mark(20, 10, Marker::EGrave)
        .parameter(21, "Seal check", "Replace gasket")
        .mark(21, 12, Marker::ECircumflex)
        .mark(21, 20, Marker::Ordinal)
        .parameter(22, "Hinge play", "")
        .mark(22, 30, Marker::EGrave)
        .mark(22, 40, Marker::EGrave)
        .parameter(23, "Orphan", "x")
        .mark(24, 10, Marker::EGrave)
        .parameter(25, "Washer swap", "Replace washer")
        .mark(25, 20, Marker::ECircumflex)
}

/// The shared scenario matrix
pub fn scenario_grid() -> Grid {
    scenario_fixture().build()
}

/// Colour table for [`scenario_grid`]
pub fn scenario_colors() -> CellColorTable {
    let mut table = CellColorTable::new();
    table
        .insert(HOUSING_ROW, CRACK_COLUMN, ColorKey::new(1))
        .insert(HOUSING_ROW, 10, ColorKey::new(1))
        .insert(HOUSING_ROW, 12, ColorKey::new(2))
        .insert(HOUSING_ROW, 20, ColorKey::new(3))
        .insert(COVER_ROW, CRACK_COLUMN, ColorKey::new(4))
        .insert(COVER_ROW, SCRATCH_COLUMN, ColorKey::new(5))
        .insert(COVER_ROW, 10, ColorKey::new(9))
        .insert(COVER_ROW, 12, ColorKey::new(5))
        .insert(COVER_ROW, 30, ColorKey::new(4))
        .insert(COVER_ROW, 40, ColorKey::new(4));
    table
}

/// Single-sub-assembly grid whose only link is the row-13 fallback label
pub fn fallback_grid() -> Grid {
    MatrixFixture::new()
        .defect(CRACK_COLUMN, "Crack")
        .sub_assembly(FRAME_ROW, "Frame")
        .build()
}

/// Convenience for single-entry colour tables
pub fn colors(entries: &[(usize, usize, u32)]) -> CellColorTable {
    let mut table = CellColorTable::new();
    for &(row, column, key) in entries {
        table.insert(row, column, ColorKey::new(key));
    }
    table
}
