//! Visual property sink for computed transforms

use crate::axis::PageSize;

/// Anything whose visual properties a [`PageTransform`](crate::PageTransform) can drive
///
/// Implemented by the rendering side (a native view, a canvas element, a
/// terminal card); the transform math never depends on it.
pub trait PageTarget {
    /// Current measured size of the page
    fn size(&self) -> PageSize;

    fn set_scale_x(&mut self, scale: f64);
    fn set_scale_y(&mut self, scale: f64);

    fn set_translation_x(&mut self, translation: f64);
    fn set_translation_y(&mut self, translation: f64);

    /// Rotation about the X axis, in degrees
    fn set_rotation_x(&mut self, degrees: f64);
    /// Rotation about the Y axis, in degrees
    fn set_rotation_y(&mut self, degrees: f64);

    fn set_pivot_x(&mut self, pivot: f64);
    fn set_pivot_y(&mut self, pivot: f64);

    fn set_alpha(&mut self, alpha: f64);
}
