//! Stack geometry parameters
//!
//! Validated once at construction, so every [`GeometryConfig`] that exists
//! is usable by the transformer.

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::error::InvalidConfiguration;
use crate::Result;

/// Default scale of the foreground page
pub const DEFAULT_CURRENT_PAGE_SCALE: f64 = 0.8;
/// Default scale of the page right behind the foreground page
pub const DEFAULT_TOP_STACKED_SCALE: f64 = 0.7;
/// Default share of the slack space used for overlapping
pub const DEFAULT_OVERLAP_FACTOR: f64 = 0.4;

/// Alignment of the stack within the container's stacking dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gravity {
    /// Stack hugs the top (vertical) or left (horizontal) edge
    Leading,
    #[default]
    Center,
    /// Stack hugs the bottom (vertical) or right (horizontal) edge
    Trailing,
}

impl Gravity {
    /// Next gravity in Leading -> Center -> Trailing order
    pub fn cycle(self) -> Self {
        match self {
            Gravity::Leading => Gravity::Center,
            Gravity::Center => Gravity::Trailing,
            Gravity::Trailing => Gravity::Leading,
        }
    }
}

/// Interpolation used while the foreground page flips away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlipEasing {
    /// Decelerating scale, accelerating rotation
    #[default]
    Eased,
    Linear,
}

impl FlipEasing {
    pub fn toggle(self) -> Self {
        match self {
            FlipEasing::Eased => FlipEasing::Linear,
            FlipEasing::Linear => FlipEasing::Eased,
        }
    }
}

/// Validated, immutable stack geometry parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    stacked_count: u32,
    current_page_scale: f64,
    top_stacked_scale: f64,
    overlap_factor: f64,
    gravity: Gravity,
    axis: Axis,
    easing: FlipEasing,
}

impl GeometryConfig {
    /// Build a configuration, rejecting out-of-range scale or overlap values
    ///
    /// # Arguments
    /// * `stacked_count` - Number of pages stacked under the current page
    /// * `current_page_scale` - Scale of the current page, from (0, 1]
    /// * `top_stacked_scale` - Scale of the top stacked page, from (0, `current_page_scale`]
    /// * `overlap_factor` - Share of the space freed by scaling that stacked pages
    ///   overlap into, from [0, 1]. 1 uses all of it, 0 hides the stacked pages.
    pub fn new(
        stacked_count: u32,
        current_page_scale: f64,
        top_stacked_scale: f64,
        overlap_factor: f64,
        gravity: Gravity,
        axis: Axis,
        easing: FlipEasing,
    ) -> Result<Self> {
        validate(current_page_scale, top_stacked_scale, overlap_factor)?;

        Ok(Self {
            stacked_count,
            current_page_scale,
            top_stacked_scale,
            overlap_factor,
            gravity,
            axis,
            easing,
        })
    }

    /// Vertical stack with default scales, overlap and gravity
    pub fn with_stacked(stacked_count: u32) -> Self {
        Self::with_stacked_oriented(stacked_count, Axis::Vertical)
    }

    /// Stack along `axis` with default scales, overlap and gravity
    pub fn with_stacked_oriented(stacked_count: u32, axis: Axis) -> Self {
        Self {
            stacked_count,
            current_page_scale: DEFAULT_CURRENT_PAGE_SCALE,
            top_stacked_scale: DEFAULT_TOP_STACKED_SCALE,
            overlap_factor: DEFAULT_OVERLAP_FACTOR,
            gravity: Gravity::default(),
            axis,
            easing: FlipEasing::default(),
        }
    }

    pub fn stacked_count(&self) -> u32 {
        self.stacked_count
    }

    pub fn current_page_scale(&self) -> f64 {
        self.current_page_scale
    }

    pub fn top_stacked_scale(&self) -> f64 {
        self.top_stacked_scale
    }

    pub fn overlap_factor(&self) -> f64 {
        self.overlap_factor
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn easing(&self) -> FlipEasing {
        self.easing
    }

    /// Scale lost per stack slot; 0 when nothing is stacked
    pub fn stacked_scale_factor(&self) -> f64 {
        if self.stacked_count == 0 {
            0.0
        } else {
            (self.current_page_scale - self.top_stacked_scale) / self.stacked_count as f64
        }
    }

    /// Opacity lost per stack slot
    pub fn alpha_factor(&self) -> f64 {
        1.0 / (self.stacked_count as f64 + 1.0)
    }
}

fn validate(current_page_scale: f64, top_stacked_scale: f64, overlap_factor: f64) -> Result<()> {
    if !(current_page_scale > 0.0 && current_page_scale <= 1.0) {
        return Err(InvalidConfiguration::CurrentPageScale(current_page_scale).into());
    }

    if !(top_stacked_scale > 0.0 && top_stacked_scale <= current_page_scale) {
        return Err(InvalidConfiguration::TopStackedScale {
            value: top_stacked_scale,
            current_page_scale,
        }
        .into());
    }

    if !(0.0..=1.0).contains(&overlap_factor) {
        return Err(InvalidConfiguration::OverlapFactor(overlap_factor).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn build(current: f64, top: f64, overlap: f64) -> Result<GeometryConfig> {
        GeometryConfig::new(
            3,
            current,
            top,
            overlap,
            Gravity::Center,
            Axis::Vertical,
            FlipEasing::Eased,
        )
    }

    fn cause(result: Result<GeometryConfig>) -> InvalidConfiguration {
        match result {
            Err(Error::InvalidConfiguration(cause)) => cause,
            other => panic!("expected InvalidConfiguration, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_current_page_scale() {
        assert!(matches!(cause(build(0.0, 0.7, 0.4)), InvalidConfiguration::CurrentPageScale(_)));
        assert!(matches!(cause(build(1.1, 0.7, 0.4)), InvalidConfiguration::CurrentPageScale(_)));
        assert!(matches!(
            cause(build(f64::NAN, 0.7, 0.4)),
            InvalidConfiguration::CurrentPageScale(_)
        ));
    }

    #[test]
    fn test_rejects_top_stacked_scale() {
        assert!(matches!(
            cause(build(0.8, 0.9, 0.4)),
            InvalidConfiguration::TopStackedScale { .. }
        ));
        assert!(matches!(
            cause(build(0.8, 0.0, 0.4)),
            InvalidConfiguration::TopStackedScale { .. }
        ));
    }

    #[test]
    fn test_rejects_overlap_factor() {
        assert!(matches!(cause(build(0.8, 0.7, -0.1)), InvalidConfiguration::OverlapFactor(_)));
        assert!(matches!(cause(build(0.8, 0.7, 1.1)), InvalidConfiguration::OverlapFactor(_)));
    }

    #[test]
    fn test_accepts_boundaries() {
        assert!(build(1.0, 0.7, 0.4).is_ok());
        assert!(build(0.8, 0.8, 0.4).is_ok());
        assert!(build(0.8, 0.7, 0.0).is_ok());
        assert!(build(0.8, 0.7, 1.0).is_ok());
    }

    #[test]
    fn test_stacked_scale_factor() {
        let config = build(0.8, 0.7, 0.4).unwrap();
        assert!((config.stacked_scale_factor() - 0.1 / 3.0).abs() < 1e-9);
        assert!((config.alpha_factor() - 0.25).abs() < 1e-12);

        let flat = GeometryConfig::with_stacked(0);
        assert_eq!(flat.stacked_scale_factor(), 0.0);
        assert_eq!(flat.alpha_factor(), 1.0);
    }

    #[test]
    fn test_defaults() {
        let config = GeometryConfig::with_stacked_oriented(4, Axis::Horizontal);
        assert_eq!(config.stacked_count(), 4);
        assert_eq!(config.current_page_scale(), DEFAULT_CURRENT_PAGE_SCALE);
        assert_eq!(config.top_stacked_scale(), DEFAULT_TOP_STACKED_SCALE);
        assert_eq!(config.overlap_factor(), DEFAULT_OVERLAP_FACTOR);
        assert_eq!(config.gravity(), Gravity::Center);
        assert_eq!(config.axis(), Axis::Horizontal);
        assert_eq!(config.easing(), FlipEasing::Eased);
    }

    #[test]
    fn test_cycles() {
        assert_eq!(Gravity::Leading.cycle(), Gravity::Center);
        assert_eq!(Gravity::Trailing.cycle(), Gravity::Leading);
        assert_eq!(FlipEasing::Eased.toggle(), FlipEasing::Linear);
    }
}
