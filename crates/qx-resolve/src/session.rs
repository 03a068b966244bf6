//! Query session over one loaded matrix
//!
//! A [`MatrixSession`] owns one immutable grid and the colour source that
//! goes with it. It holds no other state, so queries are independent and
//! the session can be shared across threads. Colour lookups may be cached
//! across queries with a bounded moka cache.

use crate::hierarchy::{self, DefectAnalysis, FilteredHierarchy, HierarchyReport};
use crate::locator::{self, DefectEntry};
use crate::parameter::{resolve_parameters, Parameter};
use crate::{component, sub_assembly, ResolveResult};
use moka::sync::Cache;
use qx_matrix::{ColorLookup, ColorSource, Grid, NoColor};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default capacity of the cross-query colour cache
pub const DEFAULT_COLOR_CACHE_CAPACITY: u64 = 10_000;

/// Session tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Maximum cached colour lookups; 0 disables the cache
    pub color_cache_capacity: u64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            color_cache_capacity: DEFAULT_COLOR_CACHE_CAPACITY,
        }
    }
}

impl SessionOptions {
    /// Create default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set colour cache capacity
    #[inline]
    #[must_use]
    pub fn with_color_cache_capacity(mut self, capacity: u64) -> Self {
        self.color_cache_capacity = capacity;
        self
    }

    /// Check if the cross-query cache is enabled
    #[inline]
    #[must_use]
    pub fn caches_colors(&self) -> bool {
        self.color_cache_capacity > 0
    }
}

/// [`ColorSource`] with a bounded cross-query cache in front
#[derive(Clone)]
pub struct CachedColorSource {
    inner: Arc<dyn ColorSource>,
    cache: Cache<(String, usize), ColorLookup>,
}

impl CachedColorSource {
    /// Wrap `inner` with a cache of at most `capacity` lookups
    #[must_use]
    pub fn new(inner: Arc<dyn ColorSource>, capacity: u64) -> Self {
        Self {
            inner,
            cache: Cache::new(capacity),
        }
    }

    /// Number of cached lookups
    #[inline]
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    /// Drop every cached lookup
    #[inline]
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl ColorSource for CachedColorSource {
    fn color_of(&self, label: &str, column: usize) -> ColorLookup {
        let key = (label.to_string(), column);
        if let Some(hit) = self.cache.get(&key) {
            tracing::trace!(label, column, "colour cache hit");
            return hit;
        }
        let lookup = self.inner.color_of(label, column);
        self.cache.insert(key, lookup);
        lookup
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }
}

impl std::fmt::Debug for CachedColorSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedColorSource")
            .field("available", &self.inner.is_available())
            .field("entries", &self.cache.entry_count())
            .finish_non_exhaustive()
    }
}

/// One loaded matrix and its colour source
#[derive(Clone)]
pub struct MatrixSession {
    grid: Arc<Grid>,
    source: Arc<dyn ColorSource>,
    colors: Arc<dyn ColorSource>,
    options: SessionOptions,
}

impl MatrixSession {
    /// Session without colour information
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self::from_shared(Arc::new(grid))
    }

    /// Session over an already shared grid
    #[must_use]
    pub fn from_shared(grid: Arc<Grid>) -> Self {
        let source: Arc<dyn ColorSource> = Arc::new(NoColor);
        Self {
            grid,
            colors: Arc::clone(&source),
            source,
            options: SessionOptions::default(),
        }
    }

    /// Apply options; the colour cache is rebuilt to match
    #[must_use]
    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self.rebuild_colors();
        self
    }

    /// Attach a colour source, cached per [`SessionOptions`]
    #[must_use]
    pub fn with_color_source<C>(mut self, colors: C) -> Self
    where
        C: ColorSource + 'static,
    {
        self.source = Arc::new(colors);
        self.rebuild_colors();
        self
    }

    fn rebuild_colors(&mut self) {
        let source = Arc::clone(&self.source);
        self.colors = if self.options.caches_colors() && source.is_available() {
            Arc::new(CachedColorSource::new(
                source,
                self.options.color_cache_capacity,
            ))
        } else {
            source
        };
    }

    /// Whether colour lookups go through the cross-query cache
    #[inline]
    #[must_use]
    pub fn caches_colors(&self) -> bool {
        self.options.caches_colors() && self.source.is_available()
    }

    /// The loaded grid
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Shared handle to the loaded grid
    #[inline]
    #[must_use]
    pub fn shared_grid(&self) -> Arc<Grid> {
        Arc::clone(&self.grid)
    }

    /// Session options in effect
    #[inline]
    #[must_use]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Whether the attached colour source can produce colours
    #[inline]
    #[must_use]
    pub fn has_colors(&self) -> bool {
        self.colors.is_available()
    }

    /// Every defect, column order
    #[must_use]
    pub fn list_defects(&self) -> Vec<DefectEntry> {
        locator::list_all(&self.grid)
    }

    /// Defects whose name contains `keyword`
    #[must_use]
    pub fn search_defects(&self, keyword: &str) -> Vec<DefectEntry> {
        locator::search(&self.grid, keyword)
    }

    /// Column of the first defect matching `name`
    #[must_use]
    pub fn locate(&self, name: &str) -> Option<usize> {
        locator::locate(&self.grid, name)
    }

    /// Sub-assemblies linked to a defect column
    #[must_use]
    pub fn sub_assemblies(&self, defect_column: usize) -> Vec<String> {
        sub_assembly::resolve_sub_assemblies(&self.grid, defect_column)
    }

    /// Components marked for a sub-assembly
    #[must_use]
    pub fn components(&self, sub_assembly: &str) -> Vec<String> {
        component::resolve_components(&self.grid, sub_assembly)
    }

    /// Parameters reachable from a sub-assembly
    #[must_use]
    pub fn parameters(&self, sub_assembly: &str) -> Vec<Parameter> {
        resolve_parameters(&self.grid, sub_assembly)
    }

    /// Unfiltered analysis
    ///
    /// # Errors
    ///
    /// [`crate::ResolveError::DefectNotFound`] when the defect is not in the matrix.
    pub fn analyze(&self, defect_name: &str) -> ResolveResult<DefectAnalysis> {
        hierarchy::analyze(&self.grid, defect_name)
    }

    /// Colour-validated hierarchy
    #[must_use]
    pub fn filtered_hierarchy(&self, defect_name: &str) -> FilteredHierarchy {
        hierarchy::filtered_hierarchy(&self.grid, defect_name, self.colors.as_ref())
    }

    /// Filtered and unfiltered results together
    #[must_use]
    pub fn report(&self, defect_name: &str) -> HierarchyReport {
        hierarchy::report(&self.grid, defect_name, self.colors.as_ref())
    }
}

impl std::fmt::Debug for MatrixSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatrixSession")
            .field("dimensions", &self.grid.dimensions())
            .field("has_colors", &self.colors.is_available())
            .field("options", &self.options)
            .finish()
    }
}
