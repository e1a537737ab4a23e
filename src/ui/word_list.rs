use crate::models::Language;
use crate::session::StudySession;
use crate::utils::truncate_string;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

fn word_cell(text: Option<&str>, language: Language, width: usize, style: Style) -> Cell<'static> {
    match text {
        Some(text) => Cell::from(truncate_string(text, width)).style(style),
        None => Cell::from(format!("(no {})", language.label())).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
    }
}

pub fn draw_word_list(f: &mut Frame, session: &StudySession, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Word List: {}", session.category));

    if session.records.is_empty() {
        let message = Paragraph::new("No words found for this category.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(message, area);
        return;
    }

    let prompt = session.direction.prompt;
    let answer = session.direction.answer;
    let column_width = (area.width.saturating_sub(4) / 2) as usize;

    let header = Row::new(vec![
        Cell::from(prompt.label()),
        Cell::from(Text::from(answer.label()).alignment(Alignment::Right)),
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let rows: Vec<Row> = session
        .records
        .iter()
        .skip(session.list_offset)
        .map(|record| {
            Row::new(vec![
                word_cell(record.text(prompt), prompt, column_width, Style::default()),
                word_cell(
                    record.text(answer),
                    answer,
                    column_width,
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();

    let footer = format!(
        " Row {} of {} ",
        session.list_offset + 1,
        session.records.len()
    );

    let table = Table::new(
        rows,
        [Constraint::Percentage(50), Constraint::Percentage(50)],
    )
    .header(header)
    .column_spacing(2)
    .block(block.title_bottom(footer));
    f.render_widget(table, area);
}
