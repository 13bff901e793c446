use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of material a lesson carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Slide,
    Txt,
    Docx,
    Pdf,
    Xlsx,
    Quiz,
    Assignment,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown content type '{0}'")]
pub struct ParseContentTypeError(pub String);

impl ContentType {
    pub const ALL: [ContentType; 8] = [
        ContentType::Video,
        ContentType::Slide,
        ContentType::Txt,
        ContentType::Docx,
        ContentType::Pdf,
        ContentType::Xlsx,
        ContentType::Quiz,
        ContentType::Assignment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Video => "video",
            ContentType::Slide => "slide",
            ContentType::Txt => "txt",
            ContentType::Docx => "docx",
            ContentType::Pdf => "pdf",
            ContentType::Xlsx => "xlsx",
            ContentType::Quiz => "quiz",
            ContentType::Assignment => "assignment",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ParseContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ContentType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| ParseContentTypeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Quiz".parse::<ContentType>(), Ok(ContentType::Quiz));
        assert_eq!(" pdf ".parse::<ContentType>(), Ok(ContentType::Pdf));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "podcast".parse::<ContentType>().unwrap_err();
        assert_eq!(err, ParseContentTypeError("podcast".to_string()));
    }

    #[test]
    fn test_display_matches_serde() {
        for content_type in ContentType::ALL {
            let json = serde_json::to_value(content_type).unwrap();
            assert_eq!(json, serde_json::Value::String(content_type.to_string()));
        }
    }
}
