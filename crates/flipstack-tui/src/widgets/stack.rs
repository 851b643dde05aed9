use flipstack_core::PageSize;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::app::App;
use crate::card::CardView;

pub struct StackWidget;

impl StackWidget {
    /// Draw every materialized page of the pager into `area`
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        let size = PageSize::new(area.width as f64, area.height as f64);
        let axis = app.pager.transformer().config().axis();
        let d = axis.stacking_dimension(size);

        for (index, transform) in app.pager.transforms(size) {
            if !transform.is_visible() {
                continue;
            }

            let mut card = CardView::new(size);
            let (offset_x, offset_y) = axis.to_xy(transform.position * d, 0.0);
            card.set_layout_offset(offset_x, offset_y);
            transform.apply_to(&mut card);

            let Some(rect) = card.to_rect(area) else {
                continue;
            };

            let fill = theme.faded(theme.card_color(index), transform.alpha);
            let border = theme.faded(theme.fg0, transform.alpha);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!(" Page {} ", index + 1))
                .style(Style::default().bg(fill).fg(theme.bg0));

            frame.render_widget(Clear, rect);
            frame.render_widget(block, rect);
        }
    }
}
