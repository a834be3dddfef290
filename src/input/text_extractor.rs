//! Text extraction from various document formats
//!
//! Extractors operate on raw bytes so the same code path serves files read
//! from disk and uploaded request payloads. Extraction failures are fatal to
//! the request; there is no fallback text.

use crate::error::{Result, ResumeAtsError};
use pulldown_cmark::{html, Parser};
use std::io::Read;

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ResumeAtsError::PdfExtraction(format!("Failed to extract text from PDF: {}", e)))?;
        Ok(text)
    }
}

/// DOCX files are zip archives; the document body lives in
/// `word/document.xml`. Paragraph closes become newlines and the remaining
/// markup is stripped.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let cursor = std::io::Cursor::new(bytes);
        let mut archive = zip::ZipArchive::new(cursor)
            .map_err(|e| ResumeAtsError::DocxExtraction(format!("Not a valid DOCX archive: {}", e)))?;

        let mut document = archive
            .by_name("word/document.xml")
            .map_err(|e| ResumeAtsError::DocxExtraction(format!("Missing document body: {}", e)))?;

        let mut xml = String::new();
        document
            .read_to_string(&mut xml)
            .map_err(|e| ResumeAtsError::DocxExtraction(format!("Unreadable document body: {}", e)))?;

        Ok(xml_to_text(&xml))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| ResumeAtsError::TextProcessing(format!("Input is not valid UTF-8: {}", e)))
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let markdown = String::from_utf8(bytes.to_vec())
            .map_err(|e| ResumeAtsError::TextProcessing(format!("Input is not valid UTF-8: {}", e)))?;

        let parser = Parser::new(&markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(html_to_text(&html_output))
    }
}

fn html_to_text(html: &str) -> String {
    let text = html
        .replace("<br>", "\n")
        .replace("</p>", "\n\n")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let re = regex::Regex::new(r"<[^>]*>").unwrap();
    let clean_text = re.replace_all(&text, "");

    let lines: Vec<String> = clean_text
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}

fn xml_to_text(xml: &str) -> String {
    let text = xml
        .replace("</w:p>", "\n")
        .replace("<w:tab/>", "\t")
        .replace("<w:br/>", "\n")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'");

    let re = regex::Regex::new(r"<[^>]*>").unwrap();
    let clean_text = re.replace_all(&text, "");

    let lines: Vec<String> = clean_text
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_plain_text_extraction() {
        let text = PlainTextExtractor.extract(b"Jane Doe\nEngineer").unwrap();
        assert_eq!(text, "Jane Doe\nEngineer");
    }

    #[test]
    fn test_plain_text_rejects_invalid_utf8() {
        let result = PlainTextExtractor.extract(&[0xff, 0xfe, 0x00]);
        assert!(result.is_err());
    }

    #[test]
    fn test_markdown_extraction_strips_formatting() {
        let md = b"# Jane Doe\n\n**Software Engineer** with *experience*\n";
        let text = MarkdownExtractor.extract(md).unwrap();
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Software Engineer"));
        assert!(!text.contains("**"));
        assert!(!text.contains("#"));
    }

    #[test]
    fn test_docx_extraction() {
        // Minimal DOCX: a zip containing only word/document.xml
        let mut buf = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(std::io::Cursor::new(&mut buf));
            writer
                .start_file("word/document.xml", zip::write::FileOptions::default())
                .unwrap();
            writer
                .write_all(
                    b"<w:document><w:body><w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>\
                      <w:p><w:r><w:t>Led a team of 5</w:t></w:r></w:p></w:body></w:document>",
                )
                .unwrap();
            writer.finish().unwrap();
        }

        let text = DocxExtractor.extract(&buf).unwrap();
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Led a team of 5"));
        assert!(!text.contains("<w:"));
    }

    #[test]
    fn test_docx_extraction_rejects_garbage() {
        let result = DocxExtractor.extract(b"definitely not a zip");
        assert!(result.is_err());
    }
}
