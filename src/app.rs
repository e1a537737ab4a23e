use crate::catalog::WordSource;
use crate::models::{AppState, StudyMode};
use crate::route::Route;
use crate::session::{handle_study_input, Navigation, StudySession};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const CATEGORY_LIST_ERROR: &str = "Error loading categories. Please check the logs.";

#[derive(Debug, Default)]
pub struct CategoryMenu {
    pub categories: Vec<String>,
    pub error: Option<String>,
    pub selected: usize,
}

impl CategoryMenu {
    pub fn selected_category(&self) -> Option<&str> {
        self.categories.get(self.selected).map(String::as_str)
    }
}

/// Top-level screen state. Every page request goes through
/// [`App::navigate`], which re-reads the words directory or category file.
#[derive(Debug)]
pub struct App {
    pub source: WordSource,
    pub shuffle: bool,
    pub state: AppState,
    pub route: Route,
    pub menu: CategoryMenu,
    pub session: Option<StudySession>,
    pub not_found: Option<String>,
}

impl App {
    pub fn new(source: WordSource, shuffle: bool) -> Self {
        let mut app = Self {
            source,
            shuffle,
            state: AppState::Menu,
            route: Route::Home,
            menu: CategoryMenu::default(),
            session: None,
            not_found: None,
        };
        app.navigate(Route::Home);
        app
    }

    /// Opens a page by address. Addresses that do not resolve show the
    /// not-found screen.
    pub fn open(&mut self, path: &str) {
        match Route::parse(path) {
            Ok(route) => self.navigate(route),
            Err(e) => {
                tracing::warn!("Cannot open {}: {}", path, e);
                self.show_not_found(e.to_string());
            }
        }
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!("Navigating to {}", route);
        match &route {
            Route::Home => {
                let previous = self.session.take().map(|s| s.category);
                self.refresh_categories();
                if let Some(category) = previous
                    && let Some(pos) = self.menu.categories.iter().position(|c| *c == category)
                {
                    self.menu.selected = pos;
                }
                self.not_found = None;
                self.state = AppState::Menu;
            }
            Route::Learn { mode, category } => match self.source.load(category) {
                Ok(records) => {
                    tracing::info!(
                        "Opened {} ({} words) as {}",
                        category,
                        records.len(),
                        mode.slug()
                    );
                    self.session = Some(StudySession::new(*mode, category, records, self.shuffle));
                    self.not_found = None;
                    self.state = AppState::Study;
                }
                Err(e) => {
                    self.session = None;
                    self.show_not_found(e.to_string());
                }
            },
        }
        self.route = route;
    }

    pub fn refresh_categories(&mut self) {
        match self.source.categories() {
            Ok(categories) => {
                self.menu.categories = categories;
                self.menu.error = None;
            }
            Err(e) => {
                tracing::error!("Error reading directory: {}", e);
                self.menu.categories.clear();
                self.menu.error = Some(CATEGORY_LIST_ERROR.to_string());
            }
        }
        self.menu.selected = self
            .menu
            .selected
            .min(self.menu.categories.len().saturating_sub(1));
    }

    fn show_not_found(&mut self, reason: String) {
        self.not_found = Some(reason);
        self.state = AppState::NotFound;
    }

    /// Returns `true` when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match self.state {
            AppState::Menu => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.menu.selected = self.menu.selected.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.menu.selected < self.menu.categories.len().saturating_sub(1) {
                        self.menu.selected += 1;
                    }
                }
                KeyCode::Enter => {
                    if let Some(category) = self.menu.selected_category() {
                        let route = Route::learn(StudyMode::List, category);
                        self.navigate(route);
                    }
                }
                KeyCode::Char('r') => self.refresh_categories(),
                KeyCode::Char('q') | KeyCode::Esc => return true,
                _ => {}
            },
            AppState::Study => {
                let Some(session) = self.session.as_mut() else {
                    self.navigate(Route::Home);
                    return false;
                };
                match handle_study_input(session, key) {
                    Navigation::Stay => {}
                    Navigation::Goto(route) => self.navigate(route),
                    Navigation::Exit => return true,
                }
            }
            AppState::NotFound => match key.code {
                KeyCode::Char('q') => return true,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('b') => {
                    self.navigate(Route::Home);
                }
                _ => {}
            },
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("animals.txt"), "cat,gato\ndog,perro\n").unwrap();
        fs::write(dir.path().join("colors.txt"), "red,rojo\n").unwrap();
        fs::write(dir.path().join("empty.txt"), "\n\n").unwrap();
        let app = App::new(WordSource::new(dir.path()), false);
        (dir, app)
    }

    #[test]
    fn test_starts_on_menu_with_categories() {
        let (_dir, app) = app();
        assert_eq!(app.state, AppState::Menu);
        assert_eq!(app.menu.categories, vec!["animals", "colors", "empty"]);
        assert!(app.menu.error.is_none());
    }

    #[test]
    fn test_menu_error_when_dir_missing() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(WordSource::new(dir.path().join("gone")), true);
        assert_eq!(app.menu.error.as_deref(), Some(CATEGORY_LIST_ERROR));
        assert!(app.menu.categories.is_empty());
    }

    #[test]
    fn test_enter_opens_list_view() {
        let (_dir, mut app) = app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.state, AppState::Study);
        assert_eq!(app.route, Route::learn(StudyMode::List, "colors"));
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.mode, StudyMode::List);
        assert_eq!(session.records.len(), 1);
    }

    #[test]
    fn test_back_to_categories_keeps_selection() {
        let (_dir, mut app) = app();
        app.navigate(Route::learn(StudyMode::FlashcardWithAnswers, "colors"));
        assert!(!app.handle_key(key(KeyCode::Esc)));
        assert_eq!(app.state, AppState::Menu);
        assert_eq!(app.menu.selected_category(), Some("colors"));
        assert!(app.session.is_none());
    }

    #[test]
    fn test_mode_switch_reloads_category() {
        let (_dir, mut app) = app();
        app.navigate(Route::learn(StudyMode::List, "animals"));
        app.handle_key(key(KeyCode::Char('3')));

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.mode, StudyMode::FlashcardWithoutAnswers);
        assert_eq!(session.category, "animals");
        assert!(!session.answer_visible);
    }

    #[test]
    fn test_empty_and_missing_categories_are_not_found() {
        let (_dir, mut app) = app();
        app.navigate(Route::learn(StudyMode::List, "empty"));
        assert_eq!(app.state, AppState::NotFound);

        app.navigate(Route::learn(StudyMode::List, "missing"));
        assert_eq!(app.state, AppState::NotFound);
        assert!(app.not_found.as_deref().unwrap().contains("not found"));

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Menu);
    }

    #[test]
    fn test_open_unknown_mode_is_not_found() {
        let (_dir, mut app) = app();
        app.open("/learn/quiz/animals");
        assert_eq!(app.state, AppState::NotFound);
        assert_eq!(
            app.not_found.as_deref(),
            Some("Unknown learning type: quiz")
        );
    }

    #[test]
    fn test_open_encoded_route() {
        let (dir, mut app) = app();
        fs::write(dir.path().join("food & drink.txt"), "water,agua\n").unwrap();
        app.open("/learn/flashcard-with-answers/food%20%26%20drink");
        assert_eq!(app.state, AppState::Study);
        assert_eq!(app.session.as_ref().unwrap().category, "food & drink");
    }

    #[test]
    fn test_quit_keys() {
        let (_dir, mut app) = app();
        assert!(app.handle_key(key(KeyCode::Char('q'))));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }
}
