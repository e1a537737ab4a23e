use super::flashcard::draw_flashcard;
use super::key_hint;
use super::layout::calculate_study_chunks;
use super::word_list::draw_word_list;
use crate::models::StudyMode;
use crate::session::StudySession;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Page chrome shared by the three study modes.
pub fn draw_study(f: &mut Frame, session: &StudySession) {
    let layout = calculate_study_chunks(f.area());

    let header = Paragraph::new(session.category.as_str())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("← Back to Categories [Esc]"),
        );
    f.render_widget(header, layout.header_area);

    let titles: Vec<String> = StudyMode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| format!("{} {}", i + 1, mode.label()))
        .collect();
    let selected = StudyMode::ALL
        .iter()
        .position(|m| *m == session.mode)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(tabs, layout.nav_area);

    let prompt = session.direction.prompt.label();
    let answer = session.direction.answer.label();
    let direction_text = match session.mode {
        StudyMode::List => format!("Swap Columns ({} / {})", prompt, answer),
        _ => format!("Show: {} → {}", prompt, answer),
    };
    let direction = Paragraph::new(direction_text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(direction, layout.direction_area);

    match session.mode {
        StudyMode::List => draw_word_list(f, session, layout.content_area),
        StudyMode::FlashcardWithAnswers | StudyMode::FlashcardWithoutAnswers => {
            draw_flashcard(f, session, layout.content_area)
        }
    }

    let mut spans = Vec::new();
    if session.mode == StudyMode::List {
        spans.extend(key_hint("↑/↓", " Scroll  "));
    } else {
        spans.extend(key_hint("Enter", " Next  "));
        spans.extend(key_hint("←/→", " Prev/Next  "));
        spans.extend(key_hint("r", " Reshuffle  "));
    }
    spans.extend(key_hint("s", " Swap  "));
    if session.languages().len() > 2 {
        spans.extend(key_hint("p/a", " Language  "));
    }
    spans.extend(key_hint("1-3/Tab", " Mode  "));
    spans.extend(key_hint("Esc", " Back"));

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
