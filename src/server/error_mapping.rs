use crate::catalog::CatalogError;
use crate::store::StoreError;

/// Maps domain errors to structured error codes and optional tips.
pub trait ToStructuredError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>);

    /// Whether the request itself was at fault.
    fn is_client_error(&self) -> bool {
        false
    }
}

impl ToStructuredError for StoreError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        match self {
            StoreError::IoError(_) => ("IO_ERROR", None),
            StoreError::JsonError(_) => ("JSON_ERROR", None),
            StoreError::NotFound(_) => ("RECORD_FILE_NOT_FOUND", None),
            StoreError::Unreadable { .. } => (
                "UNREADABLE_RECORD",
                Some("Fix or remove the named record file in the data directory"),
            ),
            StoreError::Markdown(_) => ("MARKDOWN_STORE_ERROR", None),
            StoreError::IdsExhausted => ("IDS_EXHAUSTED", None),
            StoreError::Custom(_) => ("STORE_ERROR", None),
        }
    }
}

const RECONCILE_TIP: &str =
    "If positions look wrong afterwards, run ReconcileSection or ReconcileCourse";

impl ToStructuredError for CatalogError {
    fn error_code_and_tip(&self) -> (&str, Option<&str>) {
        match self {
            CatalogError::LessonNotFound(_) => ("LESSON_NOT_FOUND", None),
            CatalogError::SectionNotFound(_) => ("SECTION_NOT_FOUND", None),
            CatalogError::InvalidPosition(_) => {
                ("INVALID_POSITION", Some("Positions start at 1"))
            }
            CatalogError::TitleRequired => ("TITLE_REQUIRED", Some("Provide a non-empty title")),
            CatalogError::InvalidContentType(_) => (
                "INVALID_CONTENT_TYPE",
                Some("Use one of: video, slide, txt, docx, pdf, xlsx, quiz, assignment"),
            ),
            CatalogError::StoreError(e) => {
                let (code, tip) = e.error_code_and_tip();
                (code, Some(tip.unwrap_or(RECONCILE_TIP)))
            }
        }
    }

    fn is_client_error(&self) -> bool {
        !matches!(self, CatalogError::StoreError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::ParseContentTypeError;

    #[test]
    fn test_catalog_error_codes() {
        let cases = [
            (CatalogError::LessonNotFound(1), "LESSON_NOT_FOUND"),
            (CatalogError::SectionNotFound(1), "SECTION_NOT_FOUND"),
            (CatalogError::InvalidPosition(0), "INVALID_POSITION"),
            (CatalogError::TitleRequired, "TITLE_REQUIRED"),
            (
                CatalogError::InvalidContentType(ParseContentTypeError("gif".to_string())),
                "INVALID_CONTENT_TYPE",
            ),
        ];
        for (err, code) in cases {
            assert_eq!(err.error_code_and_tip().0, code);
        }
    }

    #[test]
    fn test_store_failure_keeps_store_code_and_adds_tip() {
        let err = CatalogError::StoreError(StoreError::custom("disk full"));
        let (code, tip) = err.error_code_and_tip();
        assert_eq!(code, "STORE_ERROR");
        assert_eq!(tip, Some(RECONCILE_TIP));

        let io = CatalogError::StoreError(StoreError::IoError(std::io::Error::other("x")));
        assert_eq!(io.error_code_and_tip().0, "IO_ERROR");
    }

    #[test]
    fn test_unreadable_record_keeps_its_own_tip() {
        let err = CatalogError::StoreError(StoreError::unreadable("notes", "not a record id"));
        let (code, tip) = err.error_code_and_tip();
        assert_eq!(code, "UNREADABLE_RECORD");
        assert_ne!(tip, Some(RECONCILE_TIP));
        assert!(!err.is_client_error());
        assert!(CatalogError::TitleRequired.is_client_error());
    }
}
