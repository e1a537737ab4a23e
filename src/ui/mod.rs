pub mod layout;
mod flashcard;
mod menu;
mod study;
mod word_list;

pub use layout::{calculate_card_chunks, calculate_study_chunks};
pub use menu::{draw_menu, draw_not_found};
pub use study::draw_study;

use crate::app::App;
use crate::models::AppState;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    match app.state {
        AppState::Menu => draw_menu(f, &app.menu),
        AppState::Study => match &app.session {
            Some(session) => draw_study(f, session),
            None => draw_not_found(f, "No category loaded"),
        },
        AppState::NotFound => draw_not_found(f, app.not_found.as_deref().unwrap_or_default()),
    }
}

fn key_hint(key: &'static str, label: &'static str) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(label),
    ]
}
