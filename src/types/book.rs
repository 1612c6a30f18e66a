use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Identifier assigned to a book by the store.
pub type BookId = i32;

/// A stored book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub published_year: Option<i32>,
    pub isbn: Option<String>,
}

impl Book {
    pub fn new(id: BookId, fields: BookFields) -> Self {
        Self {
            id,
            title: fields.title,
            author: fields.author,
            published_year: fields.published_year,
            isbn: fields.isbn,
        }
    }

    pub fn fields(&self) -> BookFields {
        BookFields {
            title: self.title.clone(),
            author: self.author.clone(),
            published_year: self.published_year,
            isbn: self.isbn.clone(),
        }
    }

    /// Merges `patch` over the fields of this book.
    pub fn patched(&self, patch: BookPatch) -> BookFields {
        let current = self.fields();

        BookFields {
            title: patch.title.unwrap_or(current.title),
            author: patch.author.unwrap_or(current.author),
            published_year: patch.published_year.unwrap_or(current.published_year),
            isbn: patch.isbn.unwrap_or(current.isbn),
        }
    }
}

/// The writable fields of a book.
///
/// Deserializing into this type is the whitelist: unknown fields of the payload are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Validate)]
pub struct BookFields {
    #[validate(length(min = 1, max = 255, message = "Must be between 1 and 255 characters long"))]
    pub title: String,
    #[validate(length(min = 1, max = 255, message = "Must be between 1 and 255 characters long"))]
    pub author: String,
    #[serde(default)]
    pub published_year: Option<i32>,
    #[serde(default)]
    #[validate(length(max = 13, message = "Must be at most 13 characters long"))]
    pub isbn: Option<String>,
}

/// A partial update of a book.
///
/// A missing field keeps the current value. For optional fields an explicit `null` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct BookPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub published_year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub isbn: Option<Option<String>>,
}

/// Marks a field as present, even if its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            published_year: Some(1965),
            isbn: Some("9780441013593".to_string()),
        }
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let fields: BookFields = serde_json::from_value(serde_json::json!({
            "title": "Dune",
            "author": "Herbert",
            "published_year": 1965,
            "extra": "x",
            "id": 42
        }))
        .expect("Fields are parsable");

        let value = serde_json::to_value(&fields).expect("Fields are serializable");

        assert_eq!(
            value,
            serde_json::json!({
                "title": "Dune",
                "author": "Herbert",
                "published_year": 1965,
                "isbn": null
            })
        );
    }

    #[test]
    fn patch_keeps_missing_fields() {
        let patch: BookPatch =
            serde_json::from_value(serde_json::json!({ "title": "Dune Messiah" })).unwrap();

        let fields = dune().patched(patch);

        assert_eq!(fields.title, "Dune Messiah");
        assert_eq!(fields.author, "Herbert");
        assert_eq!(fields.published_year, Some(1965));
        assert_eq!(fields.isbn.as_deref(), Some("9780441013593"));
    }

    #[test]
    fn patch_null_clears_optional_fields() {
        let patch: BookPatch =
            serde_json::from_value(serde_json::json!({ "isbn": null, "author": null })).unwrap();

        assert_eq!(patch.isbn, Some(None));
        assert_eq!(patch.published_year, None);

        let fields = dune().patched(patch);

        assert_eq!(fields.isbn, None);
        assert_eq!(fields.author, "Herbert");
        assert_eq!(fields.published_year, Some(1965));
    }

    #[test]
    fn validation_limits() {
        let mut fields = dune().fields();
        assert!(fields.validate().is_ok());

        fields.isbn = Some("12345678901234".to_string());
        fields.title = String::new();

        let errors = fields.validate().unwrap_err();
        let errors = errors.field_errors();

        assert!(errors.contains_key("isbn"));
        assert!(errors.contains_key("title"));
        assert!(!errors.contains_key("author"));
    }
}
