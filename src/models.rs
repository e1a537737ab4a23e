use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
    Dutch,
}

impl Language {
    /// Languages in file column order.
    pub const ALL: [Language; 3] = [Language::English, Language::Spanish, Language::Dutch];

    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::Dutch => "Dutch",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::Dutch => "dutch",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Language::Dutch)
    }
}

/// One valid line of a category file. English and Spanish are always
/// non-empty; Dutch is either absent or non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    english: String,
    spanish: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    dutch: Option<String>,
}

impl WordRecord {
    /// Trims every field and returns `None` unless both required fields
    /// have text left.
    pub fn new(english: &str, spanish: &str, dutch: Option<&str>) -> Option<Self> {
        let english = english.trim();
        let spanish = spanish.trim();
        if english.is_empty() || spanish.is_empty() {
            return None;
        }

        let dutch = dutch
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Some(Self {
            english: english.to_string(),
            spanish: spanish.to_string(),
            dutch,
        })
    }

    pub fn english(&self) -> &str {
        &self.english
    }

    pub fn spanish(&self) -> &str {
        &self.spanish
    }

    pub fn dutch(&self) -> Option<&str> {
        self.dutch.as_deref()
    }

    pub fn text(&self, language: Language) -> Option<&str> {
        match language {
            Language::English => Some(&self.english),
            Language::Spanish => Some(&self.spanish),
            Language::Dutch => self.dutch(),
        }
    }
}

/// Languages a set of records can be studied in: the required ones, plus
/// any optional language carried by at least one record.
pub fn available_languages(records: &[WordRecord]) -> Vec<Language> {
    Language::ALL
        .into_iter()
        .filter(|lang| lang.is_required() || records.iter().any(|r| r.text(*lang).is_some()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudyMode {
    List,
    FlashcardWithAnswers,
    FlashcardWithoutAnswers,
}

impl StudyMode {
    pub const ALL: [StudyMode; 3] = [
        StudyMode::List,
        StudyMode::FlashcardWithAnswers,
        StudyMode::FlashcardWithoutAnswers,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            StudyMode::List => "list",
            StudyMode::FlashcardWithAnswers => "flashcard-with-answers",
            StudyMode::FlashcardWithoutAnswers => "flashcard-without-answers",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.slug() == slug)
    }

    pub fn label(self) -> &'static str {
        match self {
            StudyMode::List => "List",
            StudyMode::FlashcardWithAnswers => "Flashcards (Answers)",
            StudyMode::FlashcardWithoutAnswers => "Flashcards (Test)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            StudyMode::List => StudyMode::FlashcardWithAnswers,
            StudyMode::FlashcardWithAnswers => StudyMode::FlashcardWithoutAnswers,
            StudyMode::FlashcardWithoutAnswers => StudyMode::List,
        }
    }
}

/// Which language is asked and which is the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub prompt: Language,
    pub answer: Language,
}

impl Default for Direction {
    fn default() -> Self {
        Self {
            prompt: Language::English,
            answer: Language::Spanish,
        }
    }
}

impl Direction {
    pub fn swapped(self) -> Self {
        Self {
            prompt: self.answer,
            answer: self.prompt,
        }
    }

    /// Moves the prompt to the next available language, skipping the answer.
    pub fn cycle_prompt(self, available: &[Language]) -> Self {
        Self {
            prompt: next_language(self.prompt, self.answer, available),
            ..self
        }
    }

    /// Moves the answer to the next available language, skipping the prompt.
    pub fn cycle_answer(self, available: &[Language]) -> Self {
        Self {
            answer: next_language(self.answer, self.prompt, available),
            ..self
        }
    }
}

fn next_language(current: Language, taken: Language, available: &[Language]) -> Language {
    let Some(pos) = available.iter().position(|l| *l == current) else {
        return current;
    };
    available
        .iter()
        .cycle()
        .skip(pos + 1)
        .take(available.len())
        .find(|l| **l != taken)
        .copied()
        .unwrap_or(current)
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Study,
    NotFound,
}
