//! Decoding of uploaded resume bytes to plain text.
//!
//! PDF goes through `pdf-extract`, DOCX through `docx-rs`, `.txt` is read as
//! UTF-8. The engine only ever sees the resulting `String`; every failure here
//! surfaces as a `DocumentError` before analysis starts.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported file format '{0}'. Please upload PDF or DOCX files.")]
    UnsupportedFormat(String),

    #[error("Error reading PDF: {0}")]
    Pdf(String),

    #[error("Error reading DOCX: {0}")]
    Docx(String),

    #[error("Text file is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Formats accepted for resume upload, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    pub fn from_filename(filename: &str) -> Result<Self, DocumentError> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Ok(Self::Pdf)
        } else if lower.ends_with(".docx") {
            Ok(Self::Docx)
        } else if lower.ends_with(".txt") {
            Ok(Self::Text)
        } else {
            Err(DocumentError::UnsupportedFormat(filename.to_string()))
        }
    }
}

/// Decodes an uploaded document into plain text.
///
/// CPU-bound for PDF and DOCX; call from `spawn_blocking` inside handlers.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, DocumentError> {
    match DocumentFormat::from_filename(filename)? {
        DocumentFormat::Text => Ok(String::from_utf8(bytes.to_vec())?),
        DocumentFormat::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| DocumentError::Pdf(e.to_string()))
        }
        DocumentFormat::Docx => docx_text(bytes),
    }
}

/// One line per paragraph, runs concatenated.
fn docx_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| DocumentError::Docx(format!("{e:?}")))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            for paragraph_child in &paragraph.children {
                if let ParagraphChild::Run(run) = paragraph_child {
                    for run_child in &run.children {
                        if let RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection_is_case_insensitive() {
        assert_eq!(DocumentFormat::from_filename("CV.PDF").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_filename("cv.Docx").unwrap(), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::from_filename("resume.txt").unwrap(), DocumentFormat::Text);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = DocumentFormat::from_filename("resume.odt").unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("PDF or DOCX"));
    }

    #[test]
    fn test_plain_text_passthrough() {
        let text = extract_text("resume.txt", b"Python developer, 3 years experience").unwrap();
        assert_eq!(text, "Python developer, 3 years experience");
    }

    #[test]
    fn test_invalid_utf8_is_a_decode_error() {
        let err = extract_text("resume.txt", &[0xff, 0xfe, 0xfd]).unwrap_err();
        assert!(matches!(err, DocumentError::Encoding(_)));
    }

    #[test]
    fn test_garbage_docx_is_a_decode_error() {
        let err = extract_text("resume.docx", b"definitely not a zip").unwrap_err();
        assert!(matches!(err, DocumentError::Docx(_)));
    }
}
