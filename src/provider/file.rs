//! File-backed quiz content.

use std::path::{Path, PathBuf};

use crate::models::Quiz;

use super::{parse_quiz, ContentProvider, LoadError};

/// Loads a quiz from a JSON file.
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ContentProvider for FileProvider {
    async fn fetch(&self) -> Result<Quiz, LoadError> {
        let json = tokio::fs::read_to_string(&self.path).await?;
        parse_quiz(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let provider = FileProvider::new("does-not-exist.json");
        assert!(matches!(provider.fetch().await, Err(LoadError::Io(_))));
    }
}
