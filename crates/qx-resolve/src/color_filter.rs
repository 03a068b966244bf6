//! Colour validation filter
//!
//! A component is validated for a defect when at least one of its columns,
//! on a linked sub-assembly's row, shares the colour of that sub-assembly's
//! cell at the defect column. Lookups go through a [`ColorMemo`] that lives
//! for one query, so each `(label, column)` pair hits the source once.

use indexmap::IndexSet;
use qx_matrix::{layout, ColorLookup, ColorSource, Grid};
use std::collections::HashMap;

/// Lookup counters for one memo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Lookups answered from the memo
    pub hits: u64,
    /// Lookups forwarded to the source
    pub misses: u64,
}

/// Per-query memo over a [`ColorSource`]
pub struct ColorMemo<'s> {
    source: &'s dyn ColorSource,
    entries: HashMap<(String, usize), ColorLookup>,
    stats: MemoStats,
}

impl<'s> ColorMemo<'s> {
    /// Wrap a source for the duration of one query
    #[must_use]
    pub fn new(source: &'s dyn ColorSource) -> Self {
        Self {
            source,
            entries: HashMap::new(),
            stats: MemoStats::default(),
        }
    }

    /// Colour of the cell on the row labelled `label` at `column`
    pub fn lookup(&mut self, label: &str, column: usize) -> ColorLookup {
        if let Some(&hit) = self.entries.get(&(label.to_string(), column)) {
            self.stats.hits += 1;
            return hit;
        }
        self.stats.misses += 1;
        let result = self.source.color_of(label, column);
        self.entries.insert((label.to_string(), column), result);
        result
    }

    /// Whether the underlying source can ever produce a colour
    #[inline]
    #[must_use]
    pub fn source_available(&self) -> bool {
        self.source.is_available()
    }

    /// Hit and miss counters so far
    #[inline]
    #[must_use]
    pub fn stats(&self) -> MemoStats {
        self.stats
    }
}

impl std::fmt::Debug for ColorMemo<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorMemo")
            .field("entries", &self.entries.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

/// Validated components and whether colour information was missing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorFilterOutcome {
    /// Validated component names, first-seen order, no duplicates
    pub validated: Vec<String>,
    /// Sub-assemblies existed but none had a known reference colour
    pub degraded: bool,
}

/// Keep the `components` validated by colour for any of `sub_assemblies`
///
/// Sub-assemblies are visited in order. Each one's reference colour is its
/// cell at `defect_column`; an Unknown reference validates nothing for that
/// sub-assembly. Candidates are checked by name across every component
/// column carrying it.
pub fn filter_validated_components(
    grid: &Grid,
    sub_assemblies: &[String],
    components: &[String],
    defect_column: usize,
    memo: &mut ColorMemo<'_>,
) -> ColorFilterOutcome {
    let mut validated: IndexSet<&str> = IndexSet::new();
    let mut known_references = 0usize;

    for sub_assembly in sub_assemblies {
        let reference = memo.lookup(sub_assembly, defect_column);
        if !reference.is_known() {
            tracing::trace!(sub_assembly = %sub_assembly, defect_column, "no reference colour");
            continue;
        }
        known_references += 1;

        for component in components {
            if validated.contains(component.as_str()) {
                continue;
            }
            let matched = layout::component_columns_named(grid, component)
                .any(|column| memo.lookup(sub_assembly, column).matches(reference));
            if matched {
                validated.insert(component.as_str());
            }
        }
    }

    let degraded = !sub_assemblies.is_empty() && known_references == 0;
    if degraded {
        tracing::warn!(
            defect_column,
            sub_assemblies = sub_assemblies.len(),
            source_available = memo.source_available(),
            "colour information unavailable, no component validated"
        );
    }

    tracing::debug!(
        defect_column,
        validated = validated.len(),
        hits = memo.stats().hits,
        misses = memo.stats().misses,
        "colour filter applied"
    );

    ColorFilterOutcome {
        validated: validated.into_iter().map(str::to_string).collect(),
        degraded,
    }
}
