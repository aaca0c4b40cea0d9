use crate::error::ExtractionError;

/// Document-to-text collaborator seam. PDF and other binary formats are
/// handled by external implementations; the engine only consumes the text.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Pass-through extractor for documents that already are UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        String::from_utf8(bytes.to_vec())
            .map_err(|err| ExtractionError::Unreadable(format!("not valid UTF-8: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_utf8_text() {
        let text = PlainTextExtractor.extract_text("resume body".as_bytes()).unwrap();
        assert_eq!(text, "resume body");
    }

    #[test]
    fn rejects_non_utf8_input() {
        let err = PlainTextExtractor.extract_text(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ExtractionError::Unreadable(_)));
    }
}
