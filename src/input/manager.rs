//! Input manager for routing files and uploads to the right extractor

use crate::error::{Result, ResumeAtsError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Extract text from a file on disk, dispatching on its extension.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeAtsError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        let bytes = fs::read(path).await?;

        info!("Extracting text from: {}", path.display());
        let text = extract_from_bytes(&bytes, file_type)
            .map_err(|e| match e {
                ResumeAtsError::UnsupportedFormat(_) => ResumeAtsError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )),
                other => other,
            })?;

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeAtsError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

/// Extract text from raw bytes with a known file type. Used directly by the
/// HTTP surface, where uploads declare their type instead of carrying a path.
pub fn extract_from_bytes(bytes: &[u8], file_type: FileType) -> Result<String> {
    match file_type {
        FileType::Pdf => PdfExtractor.extract(bytes),
        FileType::Docx => DocxExtractor.extract(bytes),
        FileType::Text => PlainTextExtractor.extract(bytes),
        FileType::Markdown => MarkdownExtractor.extract(bytes),
        FileType::Unknown => Err(ResumeAtsError::UnsupportedFormat(
            "Unsupported file type".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_extract_from_txt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"Jane Doe\nSoftware Engineer")
            .unwrap();

        let mut manager = InputManager::new();
        let text = manager.extract_text(&path).await.unwrap();
        assert!(text.contains("Jane Doe"));
        assert_eq!(manager.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_cache_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "cached content").unwrap();

        let mut manager = InputManager::new();
        let first = manager.extract_text(&path).await.unwrap();
        let second = manager.extract_text(&path).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(manager.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.xyz");
        std::fs::write(&path, "content").unwrap();

        let mut manager = InputManager::new();
        assert!(manager.extract_text(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_nonexistent_file() {
        let mut manager = InputManager::new();
        let result = manager.extract_text(Path::new("does/not/exist.txt")).await;
        assert!(result.is_err());
    }
}
