//! Page settle animation
//!
//! Moves the pager's scroll offset between whole pages over a configured
//! duration, so every intermediate frame goes through the stack transform.
//!
//! - `easing` - settle easing curves
//! - `timing` - progress and interpolation helpers
//! - `config` - duration and frame rate helpers over `AnimationConfig`
//! - `animation` - the animator combining them
//!
//! # Usage
//!
//! ```ignore
//! use flipstack_tui::scroll::PageAnimator;
//!
//! let mut animator = PageAnimator::new(config.ui.animation.clone(), pager.scroll());
//! animator.animate_to(pager.scroll() - 1.0);
//!
//! // each frame
//! pager.set_scroll(animator.update());
//! ```

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::PageAnimator;
pub use config::AnimationConfigExt;
pub use easing::EasingTypeExt;
