use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("pdf text extraction failed: {0}")]
    Pdf(#[from] pdf_extract::OutputError),
    #[error("document produced no text")]
    EmptyText,
}

/// Best-effort plain-text extraction from raw document bytes.
///
/// The scoring core never sees extraction failures: `extract_text` swallows
/// them to an empty string, which downstream simply scores as an empty
/// resume. `try_extract` exposes the underlying error for callers that want
/// to report it.
pub trait TextExtractor: Send + Sync {
    /// Implementation name ("pdf")
    fn name(&self) -> &'static str;

    fn try_extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;

    fn extract_text(&self, bytes: &[u8]) -> String {
        match self.try_extract(bytes) {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    extractor = self.name(),
                    error = %err,
                    "text extraction failed; treating document as empty"
                );
                String::new()
            }
        }
    }
}

/// PDF extraction via `pdf-extract`. Resume uploads are assumed to be PDF.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn try_extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let text = pdf_extract::extract_text_from_mem(bytes)?;
        if text.trim().is_empty() {
            return Err(ExtractError::EmptyText);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_bytes_error_on_try_extract() {
        assert!(PdfExtractor.try_extract(b"not a pdf").is_err());
    }

    #[test]
    fn extract_text_swallows_failure_to_empty_string() {
        assert_eq!(PdfExtractor.extract_text(b"not a pdf"), "");
        assert_eq!(PdfExtractor.extract_text(b""), "");
    }
}
