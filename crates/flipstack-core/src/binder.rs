//! Lazily bound stack geometry
//!
//! Spacing constants depend on the container's measured stacking dimension,
//! which is unknown until first layout. They are computed once and kept for
//! the lifetime of the engine; a later resize does not rebind.

use std::cell::{Cell, OnceCell};

use serde::Serialize;

use crate::geometry::{GeometryConfig, Gravity};

/// Spacing constants derived from a measured stacking dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundGeometry {
    /// Dimension the geometry was bound with
    pub dimension: f64,
    /// Offset between consecutive stacked pages
    pub overlap: f64,
    /// Unused slack before the stack
    pub space_before: f64,
    /// Unused slack after the stack
    pub space_after: f64,
}

impl BoundGeometry {
    /// Pure derivation from `config` and the stacking dimension `d`
    pub fn compute(config: &GeometryConfig, d: f64) -> Self {
        let scale = config.current_page_scale();
        let overlap_factor = config.overlap_factor();

        let scaled = scale * d;
        let overlap_base = (d - scaled) / (config.stacked_count() as f64 + 1.0);
        let overlap = overlap_base * overlap_factor;

        let unit = 0.5 * d * (1.0 - overlap_factor) * (1.0 - scale);
        let (space_before, space_after) = match config.gravity() {
            Gravity::Leading => (0.0, 2.0 * unit),
            Gravity::Center => (unit, unit),
            Gravity::Trailing => (2.0 * unit, 0.0),
        };

        Self {
            dimension: d,
            overlap,
            space_before,
            space_after,
        }
    }
}

/// Write-once holder for [`BoundGeometry`]
///
/// Not `Sync`; confine it to the thread that drives layout.
#[derive(Debug, Default)]
pub struct GeometryBinder {
    bound: OnceCell<BoundGeometry>,
    stale_reported: Cell<bool>,
}

impl GeometryBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind with `d` on the first call; later calls return the cached value
    pub fn bind(&self, config: &GeometryConfig, d: f64) -> &BoundGeometry {
        let bound = self.bound.get_or_init(|| {
            let bound = BoundGeometry::compute(config, d);
            tracing::debug!(
                dimension = d,
                overlap = bound.overlap,
                space_before = bound.space_before,
                space_after = bound.space_after,
                "Bound stack geometry"
            );
            bound
        });

        if bound.dimension != d && !self.stale_reported.replace(true) {
            tracing::debug!(
                bound = bound.dimension,
                requested = d,
                "Stacking dimension changed after binding, keeping bound geometry"
            );
        }

        bound
    }

    /// Cached geometry, if bound yet
    pub fn get(&self) -> Option<&BoundGeometry> {
        self.bound.get()
    }

    pub fn is_bound(&self) -> bool {
        self.bound.get().is_some()
    }
}
