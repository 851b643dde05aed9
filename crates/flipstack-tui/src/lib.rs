pub mod app;
pub mod card;
pub mod event;
pub mod input;
pub mod scroll;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use card::CardView;
pub use theme::Theme;
