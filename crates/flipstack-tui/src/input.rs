use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FlipForward,
    FlipBack,
    NudgeForward,
    NudgeBack,
    ToggleEasing,
    ToggleOrientation,
    CycleGravity,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::FlipForward,
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::FlipForward,
        (KeyCode::Down, _) => Action::FlipForward,
        (KeyCode::Right, _) => Action::FlipForward,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::FlipBack,
        (KeyCode::Up, _) => Action::FlipBack,
        (KeyCode::Left, _) => Action::FlipBack,

        // Fine steps for inspecting a frame mid-flip
        (KeyCode::Char(']'), _) => Action::NudgeForward,
        (KeyCode::Char('['), _) => Action::NudgeBack,

        (KeyCode::Char('e'), KeyModifiers::NONE) => Action::ToggleEasing,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::ToggleOrientation,
        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::CycleGravity,

        _ => Action::None,
    }
}
