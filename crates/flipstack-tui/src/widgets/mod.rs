mod stack;
mod status_bar;

pub use stack::StackWidget;
pub use status_bar::StatusBarWidget;
