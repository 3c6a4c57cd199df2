mod app;
mod grid;
mod state;
mod summary;
mod utils;

// Re-export public items
pub use self::app::{Message, MonthChoice, WeekdayPickerApp};
pub use self::grid::DayKind;
pub use self::state::AppState;

// Re-export for external use
pub use self::utils::{generate_filename, save_file};

use crate::config::Config;

/// Run the GUI application
pub fn run(config: Config) -> iced::Result {
    use iced::Application;
    WeekdayPickerApp::run(iced::Settings::with_flags(config))
}
