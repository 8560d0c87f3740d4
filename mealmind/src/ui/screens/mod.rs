pub mod home_screen;
pub mod logs_screen;

use crate::state::LogsState;

/// Screens on the navigation stack. The home page state lives on `AppState`
/// because popups and filters reach into it from anywhere.
#[derive(Debug, Clone)]
pub enum Screen {
    Home,
    Logs(LogsState),
}
