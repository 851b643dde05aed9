use flipstack_core::{PageSize, Regime};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    /// `stack_area` is the area the stack was drawn into this frame
    pub fn render(frame: &mut Frame, area: Rect, stack_area: Rect, app: &App) {
        let theme = &app.theme;
        let pager = &app.pager;

        let mode_str = if pager.settled() { "SETTLED" } else { "FLIPPING" };

        let size = PageSize::new(stack_area.width as f64, stack_area.height as f64);
        let transforms = pager.transforms(size);
        let detail = match app.foreground_transform(&transforms) {
            Some(t) => {
                let scale = t.stacking_scale().unwrap_or(0.0);
                let translation = t.translation.unwrap_or(0.0);
                let regime = match t.regime {
                    Regime::Stacked => "stacked",
                    Regime::Flipping => "flipping",
                    Regime::Hidden => "hidden",
                };
                format!(
                    "pos {:+.2} {} s={:.3} t={:.1} r={:.1} a={:.2}",
                    t.position, regime, scale, translation, t.rotation, t.alpha
                )
            }
            None => "no visible page".to_string(),
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | Page {}/{} | scroll {:.2} | {:?} {:?} {:?} | {}",
                mode_str,
                pager.current_item() + 1,
                pager.page_count(),
                pager.scroll(),
                app.stack.orientation,
                app.stack.gravity,
                app.stack.flip_easing,
                detail
            )
        };

        let help_hint = " q:quit j/k:flip [/]:nudge e/o/g:toggle ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let status_fg = if app.status_message.is_some() {
            theme.warning
        } else {
            theme.fg0
        };

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(status_fg).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
