use anyhow::Result;
use flipstack_core::{AppConfig, PageTransform, Regime, StackConfig, StackPager, StackTransformer};

use crate::input::Action;
use crate::scroll::PageAnimator;
use crate::theme::Theme;

/// Scroll step for nudging the pager by hand
pub const NUDGE_STEP: f64 = 0.1;

/// Application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    /// Stack settings currently in effect (toggles edit this copy)
    pub stack: StackConfig,
    pub pager: StackPager,
    pub animator: PageAnimator,
    pub theme: Theme,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
}

impl App {
    /// Build the app; fails when the `[stack]` section is out of range
    pub fn new(config: AppConfig, theme: Theme) -> Result<Self> {
        let stack = config.stack.clone();
        let transformer = StackTransformer::new(stack.to_geometry()?);
        let pager = StackPager::new(transformer, config.ui.page_count);
        let animator = PageAnimator::new(config.ui.animation.clone(), pager.scroll());

        Ok(Self {
            config,
            stack,
            pager,
            animator,
            theme,
            should_quit: false,
            status_message: None,
        })
    }

    /// Whether frames should be drawn at animation rate
    pub fn needs_fast_update(&self) -> bool {
        self.animator.is_animating()
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::FlipForward => self.flip_by(-1.0),
            Action::FlipBack => self.flip_by(1.0),
            Action::NudgeForward => self.nudge(-NUDGE_STEP),
            Action::NudgeBack => self.nudge(NUDGE_STEP),
            Action::ToggleEasing => {
                self.stack.flip_easing = self.stack.flip_easing.toggle();
                self.status_message = None;
                self.rebuild();
            }
            Action::ToggleOrientation => {
                self.stack.orientation = self.stack.orientation.toggle();
                self.status_message = None;
                self.rebuild();
            }
            Action::CycleGravity => {
                self.stack.gravity = self.stack.gravity.cycle();
                self.status_message = None;
                self.rebuild();
            }
            Action::None => {}
        }
    }

    /// Advance the settle animation
    pub fn tick(&mut self) {
        let offset = self.animator.update();
        self.pager.set_scroll(offset);
    }

    /// The terminal changed size
    ///
    /// Bound geometry is never refreshed inside an engine, so the demo
    /// starts a fresh one to follow the new size.
    pub fn handle_resize(&mut self) {
        tracing::debug!("Terminal resized, rebinding stack geometry");
        self.rebuild();
    }

    fn flip_by(&mut self, pages: f64) {
        let last = self.pager.page_count().saturating_sub(1) as f64;
        let target = (self.animator.target().round() + pages).clamp(0.0, last);
        if target == self.animator.target() {
            self.status_message = Some(if pages < 0.0 {
                "Already at the first page".to_string()
            } else {
                "Already at the last page".to_string()
            });
            return;
        }
        self.status_message = None;
        self.animator.animate_to(target);
        self.tick();
    }

    fn nudge(&mut self, delta: f64) {
        self.pager.scroll_by(delta);
        // snap values like 8.999999 back onto the page
        let snapped = (self.pager.scroll() * 1000.0).round() / 1000.0;
        self.pager.set_scroll(snapped);
        self.animator.set_position(self.pager.scroll());
        self.status_message = None;
    }

    fn rebuild(&mut self) {
        match self.stack.to_geometry() {
            Ok(geometry) => self.pager.set_transformer(StackTransformer::new(geometry)),
            Err(e) => {
                tracing::warn!(error = %e, "Keeping previous stack geometry");
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Transform of the page nearest the foreground, for display
    pub fn foreground_transform(&self, transforms: &[(usize, PageTransform)]) -> Option<PageTransform> {
        transforms
            .iter()
            .filter(|(_, t)| t.regime != Regime::Hidden)
            .min_by(|(_, a), (_, b)| a.position.abs().total_cmp(&b.position.abs()))
            .map(|(_, t)| *t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flipstack_core::{Axis, FlipEasing, Gravity, PageSize};

    fn app() -> App {
        let mut config = AppConfig::default();
        config.ui.page_count = 5;
        config.ui.animation.enabled = false;
        App::new(config, Theme::default()).unwrap()
    }

    #[test]
    fn test_starts_on_last_page() {
        let app = app();
        assert_eq!(app.pager.current_item(), 4);
    }

    #[test]
    fn test_flip_without_animation() {
        let mut app = app();
        app.handle_action(Action::FlipForward);
        assert_eq!(app.pager.scroll(), 3.0);
        app.handle_action(Action::FlipBack);
        app.handle_action(Action::FlipBack);
        assert_eq!(app.pager.scroll(), 4.0);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_nudge() {
        let mut app = app();
        app.handle_action(Action::NudgeForward);
        assert!((app.pager.scroll() - 3.9).abs() < 1e-9);
        app.handle_action(Action::NudgeBack);
        assert_eq!(app.pager.scroll(), 4.0);
        assert!(app.pager.settled());
    }

    #[test]
    fn test_toggles_rebuild_engine() {
        let mut app = app();
        app.handle_action(Action::ToggleOrientation);
        app.handle_action(Action::ToggleEasing);
        app.handle_action(Action::CycleGravity);
        let config = app.pager.transformer().config();
        assert_eq!(config.axis(), Axis::Horizontal);
        assert_eq!(config.easing(), FlipEasing::Linear);
        assert_eq!(config.gravity(), Gravity::Trailing);
        assert!(app.pager.transformer().bound_geometry().is_none());
    }

    #[test]
    fn test_resize_keeps_status_message() {
        let mut app = app();
        app.handle_action(Action::FlipBack);
        assert_eq!(app.status_message.as_deref(), Some("Already at the last page"));

        app.handle_resize();
        assert_eq!(app.status_message.as_deref(), Some("Already at the last page"));
        assert!(app.pager.transformer().bound_geometry().is_none());

        app.handle_action(Action::CycleGravity);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_invalid_stack_rejected() {
        let mut config = AppConfig::default();
        config.stack.current_page_scale = 0.0;
        assert!(App::new(config, Theme::default()).is_err());
    }

    #[test]
    fn test_foreground_transform() {
        let mut app = app();
        app.pager.set_scroll(3.25);
        let transforms = app.pager.transforms(PageSize::new(80.0, 24.0));
        let foreground = app.foreground_transform(&transforms).unwrap();
        assert!((foreground.position + 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }
}
