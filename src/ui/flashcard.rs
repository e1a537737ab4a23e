use super::layout::calculate_card_chunks;
use crate::models::{Language, StudyMode};
use crate::session::StudySession;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

fn side<'a>(text: Option<&'a str>, language: Language, style: Style) -> Line<'a> {
    match text {
        Some(text) => Line::from(Span::styled(text, style)),
        None => Line::from(Span::styled(
            format!("(no {})", language.label()),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    }
}

pub fn draw_flashcard(f: &mut Frame, session: &StudySession, area: Rect) {
    let test_mode = session.mode == StudyMode::FlashcardWithoutAnswers;

    if session.is_empty() {
        let title = if test_mode {
            format!("Flashcards: {} (Test Mode)", session.category)
        } else {
            format!("Flashcards: {} (With Answers)", session.category)
        };
        let message = Paragraph::new("No words loaded for this category, or the list is empty.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(message, area);
        return;
    }

    let title = if test_mode {
        format!("Flashcards: {} (Test)", session.category)
    } else {
        format!("Flashcards: {}", session.category)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = calculate_card_chunks(inner);
    let direction = session.direction;

    let prompt = Paragraph::new(side(
        session.prompt_text(),
        direction.prompt,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(prompt, layout.prompt_area);

    if !test_mode || session.answer_visible {
        let style = if test_mode {
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let answer = Paragraph::new(side(session.answer_text(), direction.answer, style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(answer, layout.answer_area);
    }

    let progress = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .percent(session.progress_percent());
    f.render_widget(progress, layout.progress_area);

    let counter = Paragraph::new(format!(
        "Card {} / {}",
        session.current_index + 1,
        session.len()
    ))
    .style(Style::default().fg(Color::Gray))
    .alignment(Alignment::Center);
    f.render_widget(counter, layout.counter_area);

    if test_mode {
        let hint = if session.answer_visible {
            "Press Enter for next word"
        } else {
            "Press Enter to reveal answer"
        };
        let hint = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(hint, layout.hint_area);
    }
}
