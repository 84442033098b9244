//! PDF text extraction wrapper
//!
//! Wraps the pdf-extract crate with error handling for:
//! - Missing or unreadable files
//! - Encrypted PDFs
//! - Scanned/image-only PDFs (these yield empty text, not an error)
//!
//! Failures never propagate: a diagnostic goes to stderr and the caller
//! gets an empty string, so downstream stages must check for empty output.

use std::path::Path;

/// Extract the full text of a PDF, pages joined with newlines.
///
/// Returns an empty string if the file is missing, unreadable, or the
/// decoder fails.
pub fn extract_text(path: &Path) -> String {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error reading PDF {}: {}", path.display(), e);
            return String::new();
        }
    };

    match pdf_extract::extract_text_from_mem(&bytes) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error extracting text from PDF {}: {}", path.display(), e);
            String::new()
        }
    }
}

/// Load raw PDF bytes for providers that accept the document directly.
pub fn load_pdf_bytes(path: &Path) -> Result<Vec<u8>, String> {
    std::fs::read(path).map_err(|e| format!("Error loading PDF {}: {}", path.display(), e))
}

/// Normalize extracted text: collapse whitespace runs and strip
/// "Page N" artifacts left by the text layer.
pub fn clean_text(text: &str) -> String {
    let ws = regex::Regex::new(r"\s+").unwrap();
    let page = regex::Regex::new(r"Page \d+").unwrap();

    let text = page.replace_all(text, "");
    ws.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_yields_empty_string() {
        let text = extract_text(&PathBuf::from("tmp/does_not_exist.pdf"));
        assert_eq!(text, "");
    }

    #[test]
    fn test_garbage_bytes_yield_empty_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_a_pdf.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();
        assert_eq!(extract_text(&path), "");
    }

    #[test]
    fn test_clean_text() {
        let raw = "Rupees   and\n\nPaise Page 12  one rupee";
        assert_eq!(clean_text(raw), "Rupees and Paise one rupee");
    }

}
