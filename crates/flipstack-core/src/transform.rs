//! Position-to-transform mapping
//!
//! A page's position is its continuous scroll offset relative to the
//! foreground page: 0 is the foreground, negative values sit behind it in
//! the stack and (0, 1] is the page currently flipping away.

use serde::Serialize;

use crate::axis::{Axis, PageSize};
use crate::binder::{BoundGeometry, GeometryBinder};
use crate::curves;
use crate::geometry::{FlipEasing, GeometryConfig};
use crate::target::PageTarget;

/// Maximum flip rotation, in degrees
pub const MAX_ROTATION: f64 = 90.0;

/// Which part of the mapping a position falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Deeper than the stack or past the flip; fully transparent
    Hidden,
    /// Resting in the stack, foreground included
    Stacked,
    /// Leaving the foreground
    Flipping,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pivot {
    pub x: f64,
    pub y: f64,
}

/// Visual properties for one page on one frame
///
/// Hidden pages carry no scale or translation; a renderer should leave
/// whatever it had and rely on `alpha == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageTransform {
    pub position: f64,
    pub regime: Regime,
    pub axis: Axis,
    pub scale: Option<Scale>,
    /// Translation along the stacking axis
    pub translation: Option<f64>,
    /// Rotation in degrees about the axis orthogonal to the stacking direction
    pub rotation: f64,
    pub pivot: Pivot,
    pub alpha: f64,
}

impl PageTransform {
    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }

    /// Scale along the stacking axis
    pub fn stacking_scale(&self) -> Option<f64> {
        self.scale.map(|s| match self.axis {
            Axis::Vertical => s.y,
            Axis::Horizontal => s.x,
        })
    }

    pub fn translation_x(&self) -> Option<f64> {
        match self.axis {
            Axis::Vertical => self.translation.map(|_| 0.0),
            Axis::Horizontal => self.translation,
        }
    }

    pub fn translation_y(&self) -> Option<f64> {
        match self.axis {
            Axis::Vertical => self.translation,
            Axis::Horizontal => self.translation.map(|_| 0.0),
        }
    }

    pub fn rotation_x(&self) -> f64 {
        if self.axis.rotates_about_x() {
            self.rotation
        } else {
            0.0
        }
    }

    pub fn rotation_y(&self) -> f64 {
        if self.axis.rotates_about_x() {
            0.0
        } else {
            self.rotation
        }
    }

    /// Write this transform to a renderable
    ///
    /// Only the properties the regime defines are written.
    pub fn apply_to<T: PageTarget + ?Sized>(&self, target: &mut T) {
        if self.axis.rotates_about_x() {
            target.set_rotation_x(self.rotation);
        } else {
            target.set_rotation_y(self.rotation);
        }
        target.set_pivot_x(self.pivot.x);
        target.set_pivot_y(self.pivot.y);

        if let Some(scale) = self.scale {
            target.set_scale_x(scale.x);
            target.set_scale_y(scale.y);
        }
        if let Some(translation) = self.translation {
            match self.axis {
                Axis::Vertical => target.set_translation_y(translation),
                Axis::Horizontal => target.set_translation_x(translation),
            }
        }
        target.set_alpha(self.alpha);
    }
}

/// The stack transformer: frozen geometry plus write-once bound spacing
#[derive(Debug)]
pub struct StackTransformer {
    config: GeometryConfig,
    binder: GeometryBinder,
}

impl StackTransformer {
    pub fn new(config: GeometryConfig) -> Self {
        Self {
            config,
            binder: GeometryBinder::new(),
        }
    }

    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Bind spacing constants; only the first dimension is honored
    pub fn bind(&self, d: f64) -> &BoundGeometry {
        self.binder.bind(&self.config, d)
    }

    pub fn bound_geometry(&self) -> Option<&BoundGeometry> {
        self.binder.get()
    }

    /// Compute the transform for a page at `position`
    ///
    /// Binds the geometry on first use with the stacking dimension of `size`.
    pub fn compute_transform(&self, position: f64, size: PageSize) -> PageTransform {
        let axis = self.config.axis();
        let d = axis.stacking_dimension(size);
        let cross = axis.cross_dimension(size);
        let bound = *self.bind(d);
        let n = self.config.stacked_count() as f64;

        let (pivot_x, pivot_y) = axis.to_xy(d / 2.0, cross / 2.0);
        let mut transform = PageTransform {
            position,
            regime: Regime::Hidden,
            axis,
            scale: None,
            translation: None,
            rotation: 0.0,
            pivot: Pivot {
                x: pivot_x,
                y: pivot_y,
            },
            alpha: 0.0,
        };

        if position < -n - 1.0 {
            // behind the stack
        } else if position <= 0.0 {
            let scale = self.stacked_scale(position);
            let base_translation = -position * d;
            let shift = self.shift_for_scale(&bound, position, scale, d);

            transform.regime = Regime::Stacked;
            transform.scale = Some(Scale { x: scale, y: scale });
            transform.translation = Some(base_translation + shift);
            transform.alpha = 1.0 + position * self.config.alpha_factor();
        } else if position <= 1.0 {
            let zero_scale = self.config.current_page_scale();
            let (scale, rotation) = match self.config.easing() {
                FlipEasing::Eased => (
                    zero_scale - curves::eased_scale(position, zero_scale),
                    -curves::eased_rotation(position) * MAX_ROTATION,
                ),
                FlipEasing::Linear => (zero_scale - position, -position * MAX_ROTATION),
            };
            let scale = scale.max(0.0);
            let rotation = rotation.max(-MAX_ROTATION);

            let base_translation = position * d;
            let shift = (1.0 - position) * bound.overlap;
            let (scale_x, scale_y) = axis.to_xy(scale, zero_scale);
            let (pivot_x, pivot_y) = axis.to_xy(d, cross / 2.0);

            transform.regime = Regime::Flipping;
            transform.pivot = Pivot {
                x: pivot_x,
                y: pivot_y,
            };
            transform.rotation = rotation;
            transform.scale = Some(Scale {
                x: scale_x,
                y: scale_y,
            });
            transform.translation = Some(-base_translation - bound.space_after - shift);
            transform.alpha = (1.0 - position).max(0.0);
        }

        transform
    }

    /// Compute and apply the transform for `target` at `position`
    pub fn transform_page<T: PageTarget + ?Sized>(&self, target: &mut T, position: f64) {
        let transform = self.compute_transform(position, target.size());
        transform.apply_to(target);
    }

    /// Scale of a resting page; exact at slot 0 and at the deepest slot
    fn stacked_scale(&self, position: f64) -> f64 {
        let n = self.config.stacked_count();
        if n == 0 {
            return self.config.current_page_scale();
        }
        curves::lerp_precise(
            self.config.current_page_scale(),
            self.config.top_stacked_scale(),
            -position / n as f64,
        )
    }

    /// Offset aligning a scaled page's leading edge with its stack slot
    ///
    /// Scaling keeps the page center fixed, so the `d * 0.5 * (scale - 1)`
    /// term moves the leading edge back onto the stack baseline.
    fn shift_for_scale(&self, bound: &BoundGeometry, position: f64, scale: f64, d: f64) -> f64 {
        let n = self.config.stacked_count() as f64;
        bound.space_before + (n + position) * bound.overlap + d * 0.5 * (scale - 1.0)
    }
}
