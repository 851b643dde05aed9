//! Stacking direction
//!
//! Resolves which page dimension drives the stack math, which axis the
//! flip rotates about and which axis pages translate along, so one
//! mapping serves both vertical and horizontal stacks.

use serde::{Deserialize, Serialize};

/// Measured size of a page, in the renderer's units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Direction in which pages are stacked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Pages slide and rotate top-to-bottom
    #[default]
    Vertical,
    /// Pages slide and rotate left-to-right
    Horizontal,
}

impl Axis {
    pub fn toggle(self) -> Self {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }

    /// Dimension along which pages stack (`D`)
    #[inline]
    pub fn stacking_dimension(self, size: PageSize) -> f64 {
        match self {
            Axis::Vertical => size.height,
            Axis::Horizontal => size.width,
        }
    }

    /// Dimension orthogonal to the stacking direction
    #[inline]
    pub fn cross_dimension(self, size: PageSize) -> f64 {
        match self {
            Axis::Vertical => size.width,
            Axis::Horizontal => size.height,
        }
    }

    /// Split `(stacking, cross)` components back into `(x, y)`
    #[inline]
    pub fn to_xy(self, stacking: f64, cross: f64) -> (f64, f64) {
        match self {
            Axis::Vertical => (cross, stacking),
            Axis::Horizontal => (stacking, cross),
        }
    }

    /// Whether the flip rotates about the X axis (vertical) or the Y axis
    pub fn rotates_about_x(self) -> bool {
        self == Axis::Vertical
    }
}
