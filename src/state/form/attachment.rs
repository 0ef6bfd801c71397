//! Resume attachment: selection rules and base64 encoding
//!
//! Type and size limits are enforced when the user picks the file; the
//! encoder itself assumes a previously accepted selection and only fails if
//! the file cannot be read.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Maximum accepted resume size (5 MiB)
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// Only PDF resumes are accepted
pub const RESUME_MIME: &str = "application/pdf";

/// Why a picked file was rejected at selection time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("Please select a PDF file only.")]
    NotPdf,
    #[error("File size must be less than 5MB.")]
    TooLarge,
}

/// Reading the resume off disk failed
#[derive(Debug, Error)]
#[error("failed to read resume file: {source}")]
pub struct EncodeError {
    #[from]
    source: std::io::Error,
}

/// A resume the user has picked but not yet uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
}

impl ResumeFile {
    /// Describe a file on disk as a selection candidate. The MIME type is
    /// derived from the extension; acceptance is decided by the form's
    /// `select_file` transition, not here.
    pub fn describe(path: &Path) -> std::io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume.pdf".to_string());
        Ok(Self {
            path: path.to_path_buf(),
            mime_type: mime_for_path(path).to_string(),
            size: metadata.len(),
            file_name,
        })
    }
}

/// A resume encoded for transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedResume {
    /// Base64 text of the file content
    pub content: String,
    /// Original file name
    pub file_name: String,
}

/// Read the resume fully into memory and base64-encode it.
pub async fn encode(file: &ResumeFile) -> Result<EncodedResume, EncodeError> {
    let bytes = tokio::fs::read(&file.path).await?;
    Ok(EncodedResume {
        content: STANDARD.encode(&bytes),
        file_name: file.file_name.clone(),
    })
}

/// Decode a previously encoded resume back to raw bytes.
#[allow(dead_code)]
pub fn decode(content: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(content)
}

fn mime_for_path(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => RESUME_MIME,
        _ => "application/octet-stream",
    }
}

/// Human-readable file size, as shown next to the attachment row
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exponent = (bytes as f64).log(1024.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    // Trim trailing zeros the way the original page did
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_describe_reads_name_mime_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"%PDF-1.4 fake").unwrap();

        let file = ResumeFile::describe(&path).unwrap();
        assert_eq!(file.file_name, "resume.pdf");
        assert_eq!(file.mime_type, RESUME_MIME);
        assert_eq!(file.size, 13);
    }

    #[test]
    fn test_describe_non_pdf_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, b"doc").unwrap();

        let file = ResumeFile::describe(&path).unwrap();
        assert_eq!(file.mime_type, "application/octet-stream");
    }

    #[test]
    fn test_describe_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.pdf");
        assert!(ResumeFile::describe(&path).is_err());
    }

    #[tokio::test]
    async fn test_encode_round_trips_original_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        let original: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(&original).unwrap();

        let file = ResumeFile::describe(&path).unwrap();
        let encoded = encode(&file).await.unwrap();
        assert_eq!(encoded.file_name, "resume.pdf");
        assert_eq!(decode(&encoded.content).unwrap(), original);
    }

    #[tokio::test]
    async fn test_encode_unreadable_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"pdf").unwrap();

        let mut file = ResumeFile::describe(&path).unwrap();
        // File vanishes between selection and submit
        std::fs::remove_file(&path).unwrap();
        file.path = path;
        assert!(encode(&file).await.is_err());
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(6_291_456), "6 MB");
    }
}
