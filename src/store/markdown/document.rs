use crate::ordering::RecordId;
use crate::store::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// `customFields` key holding a title the H1 heading cannot reproduce.
const TITLE_FIELD: &str = "title";

/// A record as mdstore sees it: an H1 title, a Markdown body and the
/// frontmatter's `customFields`. Timestamps are owned by mdstore and only
/// read back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub body: String,
    pub fields: HashMap<String, Value>,
    pub created_at: String,
    pub updated_at: String,
}

impl Document {
    pub fn new(id: RecordId) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub(super) fn from_item(item: &mdstore::Item) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            body: item.body.clone(),
            fields: item.frontmatter.custom_fields.clone(),
            created_at: item.frontmatter.created_at.clone(),
            updated_at: item.frontmatter.updated_at.clone(),
        }
    }

    pub fn set(&mut self, key: &str, value: impl Serialize) -> Result<(), StoreError> {
        self.fields.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(())
    }

    /// Read a custom field. A missing field reads as `null`, so only
    /// `Option` targets accept it.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, StoreError> {
        let value = self.fields.get(key).cloned().unwrap_or(Value::Null);
        serde_json::from_value(value)
            .map_err(|e| StoreError::unreadable(&self.id, format!("field `{key}`: {e}")))
    }

    /// Set the heading. Line breaks and runs of whitespace do not survive a
    /// heading line, so such a title is also kept verbatim.
    pub fn set_title(&mut self, title: &str) {
        let heading = heading_line(title);
        let verbatim = if heading == title {
            Value::Null
        } else {
            Value::String(title.to_string())
        };
        self.fields.insert(TITLE_FIELD.to_string(), verbatim);
        self.title = heading;
    }

    pub fn title(&self) -> String {
        match self.fields.get(TITLE_FIELD) {
            Some(Value::String(title)) => title.clone(),
            _ => self.title.clone(),
        }
    }

    /// Put optional text in the body. The body loses surrounding
    /// whitespace, so text that has any (or is empty) is kept verbatim under
    /// `key`; `false` under `key` marks absent text.
    pub fn set_text(&mut self, key: &str, text: Option<&str>) {
        let (body, marker) = match text {
            None => (String::new(), Value::Bool(false)),
            Some(text) if !text.is_empty() && text.trim() == text => {
                (text.to_string(), Value::Null)
            }
            Some(text) => (text.trim().to_string(), Value::String(text.to_string())),
        };
        self.fields.insert(key.to_string(), marker);
        self.body = body;
    }

    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key) {
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Bool(false)) => None,
            _ => (!self.body.is_empty()).then(|| self.body.clone()),
        }
    }
}

fn heading_line(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_title_is_only_the_heading() {
        let mut doc = Document::new(1);
        doc.set_title("Ownership basics");

        assert_eq!(doc.title, "Ownership basics");
        assert_eq!(doc.fields.get(TITLE_FIELD), Some(&Value::Null));
        assert_eq!(doc.title(), "Ownership basics");
    }

    #[test]
    fn test_multiline_title_is_kept_verbatim() {
        let mut doc = Document::new(1);
        doc.set_title("Part 1\nPart 2");

        assert_eq!(doc.title, "Part 1 Part 2");
        assert_eq!(doc.title(), "Part 1\nPart 2");
    }

    #[test]
    fn test_text_whitespace_survives() {
        let mut doc = Document::new(1);
        doc.set_text("content", Some("  indented code\n"));

        assert_eq!(doc.body, "indented code");
        assert_eq!(doc.text("content").as_deref(), Some("  indented code\n"));
    }

    #[test]
    fn test_absent_and_empty_text_differ() {
        let mut doc = Document::new(1);
        doc.set_text("content", None);
        assert_eq!(doc.text("content"), None);

        doc.set_text("content", Some(""));
        assert_eq!(doc.text("content").as_deref(), Some(""));
    }

    #[test]
    fn test_missing_required_field_is_unreadable() {
        let doc = Document::new(7);
        let err = doc.get::<u64>("sectionId").unwrap_err();
        assert!(matches!(err, StoreError::Unreadable { ref record, .. } if record == "7"));
    }
}
