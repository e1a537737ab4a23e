pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod route;
pub mod session;
pub mod ui;
pub mod utils;
pub mod words;

// Re-exports for convenience
pub use app::App;
pub use catalog::{list_categories, WordSource};
pub use config::Config;
pub use error::{ConfigError, LoadError, RouteError};
pub use models::{AppState, Direction, Language, StudyMode, WordRecord};
pub use route::Route;
pub use session::{handle_study_input, Navigation, StudySession};
pub use words::{load_category, parse_line, parse_words};
