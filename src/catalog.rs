use crate::error::LoadError;
use crate::models::WordRecord;
use crate::words::{load_category, DEFAULT_DELIMITER};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "txt";

/// Returns the category names (file stems) in `dir`, ordered by file name.
pub fn list_categories(dir: &Path, extension: &str) -> Result<Vec<String>, LoadError> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let suffix = format!(".{}", extension);
    let mut files = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && let Some(stem) = name.strip_suffix(&suffix)
            && !stem.is_empty()
        {
            files.push((name.to_string(), stem.to_string()));
        }
    }

    files.sort();
    Ok(files.into_iter().map(|(_, stem)| stem).collect())
}

/// Where category files live and how they are read.
#[derive(Debug, Clone)]
pub struct WordSource {
    pub dir: PathBuf,
    pub extension: String,
    pub delimiter: String,
}

impl WordSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    pub fn categories(&self) -> Result<Vec<String>, LoadError> {
        list_categories(&self.dir, &self.extension)
    }

    pub fn load(&self, category: &str) -> Result<Vec<WordRecord>, LoadError> {
        load_category(&self.dir, category, &self.extension, &self.delimiter)
    }
}
