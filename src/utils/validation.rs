// file: src/utils/validation.rs
// description: input validation for documents and page selections
// reference: input validation patterns

use crate::error::{Result, ScanError};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            ScanError::Validation(format!(
                "Cannot canonicalize path {}: {}",
                path.display(),
                e
            ))
        })?;

        if !canonical.is_file() {
            return Err(ScanError::Validation(format!(
                "Path is not a file: {}",
                canonical.display()
            )));
        }

        Ok(())
    }

    pub fn validate_pdf_extension(path: &Path) -> Result<()> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => Ok(()),
            _ => Err(ScanError::Validation(format!(
                "File is not a PDF: {}",
                path.display()
            ))),
        }
    }

    /// Checks a 1-based page number against the document length.
    pub fn validate_page_number(page: usize, page_count: usize) -> Result<()> {
        if page == 0 || page > page_count {
            return Err(ScanError::Validation(format!(
                "Page {} does not exist (document has {} pages)",
                page, page_count
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_file_path() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("blue-book.pdf");
        fs::write(&file_path, "%PDF-1.5").unwrap();

        assert!(Validator::validate_file_path(&file_path).is_ok());
        assert!(Validator::validate_file_path(temp.path()).is_err());
        assert!(Validator::validate_file_path(Path::new("/nonexistent")).is_err());
    }

    #[test]
    fn test_validate_pdf_extension() {
        assert!(Validator::validate_pdf_extension(Path::new("book.pdf")).is_ok());
        assert!(Validator::validate_pdf_extension(Path::new("BOOK.PDF")).is_ok());
        assert!(Validator::validate_pdf_extension(Path::new("book.txt")).is_err());
        assert!(Validator::validate_pdf_extension(Path::new("book")).is_err());
    }

    #[test]
    fn test_validate_page_number() {
        assert!(Validator::validate_page_number(1, 5).is_ok());
        assert!(Validator::validate_page_number(5, 5).is_ok());
        assert!(Validator::validate_page_number(0, 5).is_err());
        assert!(Validator::validate_page_number(6, 5).is_err());
    }
}
