//! Duration and frame rate helpers over the core `AnimationConfig`

use std::time::Duration;

pub use flipstack_core::AnimationConfig;

/// Extension trait for AnimationConfig with utility methods
pub trait AnimationConfigExt {
    /// Duration of one page change
    fn animation_duration(&self) -> Duration;

    /// Event poll interval while animating
    fn animation_tick_duration(&self) -> Duration;

    /// Whether page changes are animated at all
    fn is_smooth(&self) -> bool;
}

impl AnimationConfigExt for AnimationConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(1000 / self.fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.enabled && self.duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let config = AnimationConfig {
            fps: 50,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(20));

        let config = AnimationConfig {
            fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = AnimationConfig::default();
        assert!(config.is_smooth());
        assert_eq!(config.animation_duration(), Duration::from_millis(250));

        config.enabled = false;
        assert!(!config.is_smooth());

        config.enabled = true;
        config.duration_ms = 0;
        assert!(!config.is_smooth());
    }
}
