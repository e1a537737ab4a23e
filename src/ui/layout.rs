use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct StudyLayout {
    pub header_area: Rect,
    pub nav_area: Rect,
    pub direction_area: Rect,
    pub content_area: Rect,
    pub help_area: Rect,
}

pub struct CardLayout {
    pub prompt_area: Rect,
    pub answer_area: Rect,
    pub progress_area: Rect,
    pub counter_area: Rect,
    pub hint_area: Rect,
}

pub fn calculate_study_chunks(area: Rect) -> StudyLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    StudyLayout {
        header_area: chunks[0],
        nav_area: chunks[1],
        direction_area: chunks[2],
        content_area: chunks[3],
        help_area: chunks[4],
    }
}

/// Splits the inside of a card block.
pub fn calculate_card_chunks(inner: Rect) -> CardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    CardLayout {
        prompt_area: chunks[0],
        answer_area: chunks[1],
        progress_area: chunks[3],
        counter_area: chunks[4],
        hint_area: chunks[5],
    }
}
