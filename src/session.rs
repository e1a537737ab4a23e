use crate::models::{available_languages, Direction, Language, StudyMode, WordRecord};
use crate::route::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::seq::SliceRandom;
use rand::Rng;

const PAGE_SCROLL: usize = 10;

/// Transient view state of one opened category page.
///
/// `records` keeps file order for the list view; `deck` is the (possibly
/// shuffled) copy the flashcard modes walk through.
#[derive(Debug)]
pub struct StudySession {
    pub mode: StudyMode,
    pub category: String,
    pub records: Vec<WordRecord>,
    pub deck: Vec<WordRecord>,
    pub current_index: usize,
    pub direction: Direction,
    pub answer_visible: bool,
    pub list_offset: usize,
    pub shuffle: bool,
    languages: Vec<Language>,
}

/// What the event loop should do after a key was handled.
#[derive(Debug, PartialEq)]
pub enum Navigation {
    Stay,
    Goto(Route),
    Exit,
}

impl StudySession {
    pub fn new(mode: StudyMode, category: &str, records: Vec<WordRecord>, shuffle: bool) -> Self {
        Self::new_with_rng(mode, category, records, shuffle, &mut rand::thread_rng())
    }

    pub fn new_with_rng<R: Rng + ?Sized>(
        mode: StudyMode,
        category: &str,
        records: Vec<WordRecord>,
        shuffle: bool,
        rng: &mut R,
    ) -> Self {
        let languages = available_languages(&records);
        let mut deck = records.clone();
        if shuffle && mode != StudyMode::List {
            deck.shuffle(rng);
        }

        Self {
            mode,
            category: category.to_string(),
            records,
            deck,
            current_index: 0,
            direction: Direction::default(),
            answer_visible: false,
            list_offset: 0,
            shuffle,
            languages,
        }
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn current(&self) -> Option<&WordRecord> {
        self.deck.get(self.current_index)
    }

    pub fn prompt_text(&self) -> Option<&str> {
        self.current().and_then(|r| r.text(self.direction.prompt))
    }

    pub fn answer_text(&self) -> Option<&str> {
        self.current().and_then(|r| r.text(self.direction.answer))
    }

    /// Percentage of the deck seen so far, counting the current card.
    pub fn progress_percent(&self) -> u16 {
        if self.is_empty() {
            return 0;
        }
        ((self.current_index + 1) * 100 / self.len()) as u16
    }

    pub fn advance(&mut self) {
        if self.is_empty() {
            return;
        }
        self.answer_visible = false;
        self.current_index = (self.current_index + 1) % self.len();
    }

    pub fn go_back(&mut self) {
        if self.is_empty() {
            return;
        }
        self.answer_visible = false;
        self.current_index = (self.current_index + self.len() - 1) % self.len();
    }

    /// A click on the card. With answers shown this moves on; in test mode
    /// the first interaction reveals the answer and the second moves on.
    pub fn interact(&mut self) {
        match self.mode {
            StudyMode::List => {}
            StudyMode::FlashcardWithAnswers => self.advance(),
            StudyMode::FlashcardWithoutAnswers => {
                if self.is_empty() {
                    return;
                }
                if self.answer_visible {
                    self.advance();
                } else {
                    self.answer_visible = true;
                }
            }
        }
    }

    pub fn swap_direction(&mut self) {
        self.direction = self.direction.swapped();
        self.answer_visible = false;
    }

    pub fn cycle_prompt_language(&mut self) {
        self.direction = self.direction.cycle_prompt(&self.languages);
        self.answer_visible = false;
    }

    pub fn cycle_answer_language(&mut self) {
        self.direction = self.direction.cycle_answer(&self.languages);
        self.answer_visible = false;
    }

    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deck.shuffle(rng);
        self.current_index = 0;
        self.answer_visible = false;
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let max_offset = self.records.len().saturating_sub(1);
        self.list_offset = (self.list_offset + rows).min(max_offset);
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.list_offset = self.list_offset.saturating_sub(rows);
    }

    fn route_to(&self, mode: StudyMode) -> Navigation {
        Navigation::Goto(Route::learn(mode, self.category.clone()))
    }
}

pub fn handle_study_input(session: &mut StudySession, key: KeyEvent) -> Navigation {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Navigation::Exit;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            return Navigation::Goto(Route::Home);
        }
        KeyCode::Char('1') => return session.route_to(StudyMode::List),
        KeyCode::Char('2') => return session.route_to(StudyMode::FlashcardWithAnswers),
        KeyCode::Char('3') => return session.route_to(StudyMode::FlashcardWithoutAnswers),
        KeyCode::Tab => return session.route_to(session.mode.next()),
        KeyCode::Char('s') => session.swap_direction(),
        KeyCode::Char('p') => session.cycle_prompt_language(),
        KeyCode::Char('a') => session.cycle_answer_language(),
        _ => {
            if session.mode == StudyMode::List {
                handle_list_keys(session, key.code);
            } else {
                handle_card_keys(session, key.code);
            }
        }
    }

    Navigation::Stay
}

fn handle_list_keys(session: &mut StudySession, code: KeyCode) {
    match code {
        KeyCode::Down | KeyCode::Char('j') => session.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => session.scroll_up(1),
        KeyCode::PageDown => session.scroll_down(PAGE_SCROLL),
        KeyCode::PageUp => session.scroll_up(PAGE_SCROLL),
        KeyCode::Home => session.list_offset = 0,
        KeyCode::End => session.list_offset = session.records.len().saturating_sub(1),
        _ => {}
    }
}

fn handle_card_keys(session: &mut StudySession, code: KeyCode) {
    match code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Down => {
            session.interact()
        }
        KeyCode::Left | KeyCode::Up => session.go_back(),
        KeyCode::Char('r') => session.reshuffle(&mut rand::thread_rng()),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words() -> Vec<WordRecord> {
        vec![
            WordRecord::new("one", "uno", None).unwrap(),
            WordRecord::new("two", "dos", Some("twee")).unwrap(),
            WordRecord::new("three", "tres", None).unwrap(),
        ]
    }

    fn session(mode: StudyMode) -> StudySession {
        StudySession::new_with_rng(mode, "numbers", words(), false, &mut StdRng::seed_from_u64(7))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let session = StudySession::new_with_rng(
            StudyMode::FlashcardWithAnswers,
            "numbers",
            words(),
            true,
            &mut rng,
        );

        assert_eq!(session.len(), 3);
        let mut english: Vec<&str> = session.deck.iter().map(|r| r.english()).collect();
        english.sort();
        assert_eq!(english, vec!["one", "three", "two"]);
        assert_eq!(session.current_index, 0);
        assert!(!session.answer_visible);
        assert_eq!(session.direction, Direction::default());
    }

    #[test]
    fn test_list_mode_keeps_file_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let session =
            StudySession::new_with_rng(StudyMode::List, "numbers", words(), true, &mut rng);
        let english: Vec<&str> = session.deck.iter().map(|r| r.english()).collect();
        assert_eq!(english, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_advance_wraps_around() {
        let mut session = session(StudyMode::FlashcardWithAnswers);
        session.advance();
        session.advance();
        assert_eq!(session.current_index, 2);
        session.advance();
        assert_eq!(session.current_index, 0);
    }

    #[test]
    fn test_go_back_wraps_to_last() {
        let mut session = session(StudyMode::FlashcardWithAnswers);
        session.go_back();
        assert_eq!(session.current_index, 2);
    }

    #[test]
    fn test_progress_percent() {
        let mut session = session(StudyMode::FlashcardWithAnswers);
        assert_eq!(session.progress_percent(), 33);
        session.advance();
        assert_eq!(session.progress_percent(), 66);
        session.advance();
        assert_eq!(session.progress_percent(), 100);
    }

    #[test]
    fn test_with_answers_interaction_advances() {
        let mut session = session(StudyMode::FlashcardWithAnswers);
        session.interact();
        assert_eq!(session.current_index, 1);
        assert!(!session.answer_visible);
    }

    #[test]
    fn test_without_answers_reveal_then_advance() {
        let mut session = session(StudyMode::FlashcardWithoutAnswers);

        session.interact();
        assert!(session.answer_visible);
        assert_eq!(session.current_index, 0);

        session.interact();
        assert!(!session.answer_visible);
        assert_eq!(session.current_index, 1);
    }

    #[test]
    fn test_without_answers_last_card_wraps() {
        let mut session = session(StudyMode::FlashcardWithoutAnswers);
        session.current_index = 2;
        session.interact();
        session.interact();
        assert_eq!(session.current_index, 0);
        assert!(!session.answer_visible);
    }

    #[test]
    fn test_swap_hides_answer_and_keeps_index() {
        let mut session = session(StudyMode::FlashcardWithoutAnswers);
        session.advance();
        session.interact();
        assert!(session.answer_visible);

        session.swap_direction();
        assert!(!session.answer_visible);
        assert_eq!(session.current_index, 1);
        assert_eq!(session.prompt_text(), Some("dos"));
        assert_eq!(session.answer_text(), Some("two"));
    }

    #[test]
    fn test_cycle_language_to_dutch() {
        let mut session = session(StudyMode::FlashcardWithAnswers);
        assert_eq!(session.languages(), &Language::ALL);

        session.cycle_answer_language();
        assert_eq!(session.direction.answer, Language::Dutch);
        assert_eq!(session.answer_text(), None);
        session.advance();
        assert_eq!(session.answer_text(), Some("twee"));
    }

    #[test]
    fn test_empty_session_is_inert() {
        let mut session = StudySession::new(
            StudyMode::FlashcardWithoutAnswers,
            "empty",
            Vec::new(),
            true,
        );
        session.interact();
        session.advance();
        session.go_back();
        assert_eq!(session.current_index, 0);
        assert!(!session.answer_visible);
        assert_eq!(session.progress_percent(), 0);
        assert!(session.current().is_none());
    }

    #[test]
    fn test_reshuffle_resets_position() {
        let mut session = session(StudyMode::FlashcardWithoutAnswers);
        session.advance();
        session.interact();
        session.reshuffle(&mut StdRng::seed_from_u64(3));
        assert_eq!(session.current_index, 0);
        assert!(!session.answer_visible);
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_list_scroll_is_clamped() {
        let mut session = session(StudyMode::List);
        session.scroll_up(1);
        assert_eq!(session.list_offset, 0);
        session.scroll_down(PAGE_SCROLL);
        assert_eq!(session.list_offset, 2);
    }

    #[test]
    fn test_input_mode_navigation() {
        let mut session = session(StudyMode::List);
        assert_eq!(
            handle_study_input(&mut session, key(KeyCode::Char('3'))),
            Navigation::Goto(Route::learn(StudyMode::FlashcardWithoutAnswers, "numbers"))
        );
        assert_eq!(
            handle_study_input(&mut session, key(KeyCode::Tab)),
            Navigation::Goto(Route::learn(StudyMode::FlashcardWithAnswers, "numbers"))
        );
        assert_eq!(
            handle_study_input(&mut session, key(KeyCode::Esc)),
            Navigation::Goto(Route::Home)
        );
        assert_eq!(
            handle_study_input(
                &mut session,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Navigation::Exit
        );
    }

    #[test]
    fn test_input_card_keys() {
        let mut session = session(StudyMode::FlashcardWithoutAnswers);
        assert_eq!(handle_study_input(&mut session, key(KeyCode::Enter)), Navigation::Stay);
        assert!(session.answer_visible);
        handle_study_input(&mut session, key(KeyCode::Char(' ')));
        assert_eq!(session.current_index, 1);
        handle_study_input(&mut session, key(KeyCode::Left));
        assert_eq!(session.current_index, 0);
        handle_study_input(&mut session, key(KeyCode::Char('s')));
        assert_eq!(session.direction, Direction::default().swapped());
    }

    #[test]
    fn test_arrow_keys_reveal_before_advancing_in_test_mode() {
        let mut session = session(StudyMode::FlashcardWithoutAnswers);

        handle_study_input(&mut session, key(KeyCode::Right));
        assert_eq!(session.current_index, 0);
        assert!(session.answer_visible);

        handle_study_input(&mut session, key(KeyCode::Down));
        assert_eq!(session.current_index, 1);
        assert!(!session.answer_visible);
    }

    #[test]
    fn test_arrow_keys_advance_with_answers() {
        let mut session = session(StudyMode::FlashcardWithAnswers);
        handle_study_input(&mut session, key(KeyCode::Right));
        assert_eq!(session.current_index, 1);
        handle_study_input(&mut session, key(KeyCode::Down));
        assert_eq!(session.current_index, 2);
    }

    #[test]
    fn test_input_list_keys_do_not_move_cards() {
        let mut session = session(StudyMode::List);
        handle_study_input(&mut session, key(KeyCode::Enter));
        handle_study_input(&mut session, key(KeyCode::Down));
        assert_eq!(session.current_index, 0);
        assert_eq!(session.list_offset, 1);
        handle_study_input(&mut session, key(KeyCode::End));
        assert_eq!(session.list_offset, 2);
        handle_study_input(&mut session, key(KeyCode::Home));
        assert_eq!(session.list_offset, 0);
    }
}
