mod app;
mod effects;
mod logging;
mod settings;
mod ui;

pub use app::{run_app, AppOptions};
pub use logging::LogDestination;
pub use settings::{write_default_settings, SETTINGS_FILENAME};
