use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use flipstack_core::AppConfig;
use flipstack_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    scroll::AnimationConfigExt,
    widgets::{StackWidget, StatusBarWidget},
    App, Theme,
};

pub fn run(config: AppConfig) -> Result<()> {
    // Validate before touching the terminal so errors print normally
    let mut app = App::new(config, Theme::default())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Flipstack"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let event_handler = EventHandler::new(
        Duration::from_millis(app.config.ui.tick_rate_ms),
        app.config.ui.animation.animation_tick_duration(),
    );

    loop {
        app.tick();

        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            StackWidget::render(frame, chunks[0], app);
            StatusBarWidget::render(frame, chunks[1], chunks[0], app);
        })?;

        if app.should_quit {
            break;
        }

        match event_handler.next(app.needs_fast_update())? {
            Some(AppEvent::Key(key)) => app.handle_action(handle_key_event(key)),
            Some(AppEvent::Resize(width, height)) => {
                tracing::debug!(width, height, "Resize");
                app.handle_resize();
            }
            Some(AppEvent::Tick) | None => {}
        }
    }

    Ok(())
}
