//! Settle animation controller
//!
//! Combines the easing curves and timing helpers into [`PageAnimator`].

use std::time::{Duration, Instant};

use super::config::{AnimationConfig, AnimationConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Page settle animator
///
/// Owns the pager's scroll offset while animating. Call `animate_to()` to
/// start moving, then `update()` each frame for the interpolated offset.
#[derive(Debug, Clone)]
pub struct PageAnimator {
    animation: Option<ActiveAnimation>,
    config: AnimationConfig,
    current: f64,
}

impl PageAnimator {
    pub fn new(config: AnimationConfig, position: f64) -> Self {
        Self {
            animation: None,
            config,
            current: position,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Offset the current animation ends at
    pub fn target(&self) -> f64 {
        self.animation.as_ref().map(|a| a.to).unwrap_or(self.current)
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Jump to `position` without animating
    pub fn set_position(&mut self, position: f64) {
        self.animation = None;
        self.current = position;
    }

    /// Start moving toward `target` from the visible offset
    ///
    /// Jumps straight there when animation is disabled.
    pub fn animate_to(&mut self, target: f64) {
        if !self.config.is_smooth() {
            self.set_position(target);
            return;
        }

        if self.current == target {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from: self.current,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the animation and return the current offset
    pub fn update(&mut self) -> f64 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration) {
                self.current = anim.to;
                self.animation = None;
            } else {
                let t = anim.easing.apply(progress(anim.start, anim.duration));
                self.current = lerp(anim.from, anim.to, t);
            }
        }
        self.current
    }
}
