use crate::error::LoadError;
use crate::models::WordRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const DEFAULT_DELIMITER: &str = ",";

/// Parses one `english,spanish[,dutch]` line. Columns past the third are
/// ignored.
pub fn parse_line(line: &str, delimiter: &str) -> Option<WordRecord> {
    let mut parts = line.split(delimiter);
    let english = parts.next()?;
    let spanish = parts.next()?;
    let dutch = parts.next();

    WordRecord::new(english, spanish, dutch)
}

/// Parses a whole category file. Blank lines are dropped, invalid lines are
/// logged and skipped, and the order of valid lines is kept.
pub fn parse_words(
    content: &str,
    delimiter: &str,
    category: &str,
) -> Result<Vec<WordRecord>, LoadError> {
    let lines: Vec<&str> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.is_empty() {
        tracing::warn!("Category file {} is empty", category);
        return Err(LoadError::Empty(category.to_string()));
    }

    let mut words = Vec::with_capacity(lines.len());
    for line in lines {
        match parse_line(line, delimiter) {
            Some(record) => words.push(record),
            None => tracing::warn!(
                "Invalid line format (expected at least 2 parts) in {}: {:?}",
                category,
                line
            ),
        }
    }

    if words.is_empty() {
        return Err(LoadError::NoValidRecords(category.to_string()));
    }

    Ok(words)
}

/// Rejects names that could resolve outside the words directory.
pub fn validate_category_name(category: &str) -> Result<(), LoadError> {
    let bad = category.trim().is_empty()
        || category.contains(['/', '\\', '\0'])
        || category.contains("..");

    if bad {
        return Err(LoadError::InvalidCategory(category.to_string()));
    }
    Ok(())
}

pub fn load_category(
    dir: &Path,
    category: &str,
    extension: &str,
    delimiter: &str,
) -> Result<Vec<WordRecord>, LoadError> {
    validate_category_name(category)?;

    let path = dir.join(format!("{}.{}", category, extension));
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("Category file not found: {}", path.display());
            return Err(LoadError::NotFound(path));
        }
        Err(source) => {
            tracing::error!("Error reading category file {}: {}", path.display(), source);
            return Err(LoadError::Io { path, source });
        }
    };

    let words = parse_words(&content, delimiter, category)?;
    tracing::debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
