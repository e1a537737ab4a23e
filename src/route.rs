//! Page addresses. `/` is the category index, `/learn/<mode>/<category>`
//! opens a category in one of the study modes.

use crate::error::RouteError;
use crate::models::StudyMode;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;
use std::str::FromStr;

/// Characters `encodeURIComponent` leaves alone, besides alphanumerics.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Learn { mode: StudyMode, category: String },
}

impl Route {
    pub fn learn(mode: StudyMode, category: impl Into<String>) -> Self {
        Route::Learn {
            mode,
            category: category.into(),
        }
    }

    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Home);
        }

        let segments: Vec<&str> = trimmed.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["learn", mode, category] if !category.is_empty() => {
                let mode = StudyMode::from_slug(mode)
                    .ok_or_else(|| RouteError::UnknownMode(mode.to_string()))?;
                let category = percent_decode_str(category)
                    .decode_utf8()
                    .map_err(|_| RouteError::Malformed(path.to_string()))?;
                Ok(Route::learn(mode, category.into_owned()))
            }
            _ => Err(RouteError::Malformed(path.to_string())),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Learn { mode, category } => write!(
                f,
                "/learn/{}/{}",
                mode.slug(),
                utf8_percent_encode(category, COMPONENT)
            ),
        }
    }
}
