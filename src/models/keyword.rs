//! Typed keyword for registry search.

use serde::{Deserialize, Serialize};

/// A search keyword.
///
/// An id keyword matches only on exact id equality. A text keyword matches
/// only on a case-insensitive name substring, so `"2"` never matches id 2.
///
/// ```
/// use employee_registry::models::Keyword;
///
/// assert_eq!(Keyword::from(2), Keyword::Id(2));
/// assert_eq!(Keyword::from("2"), Keyword::Text("2".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Keyword {
    /// Exact id match.
    Id(u32),
    /// Case-insensitive name substring.
    Text(String),
}

impl From<u32> for Keyword {
    fn from(id: u32) -> Self {
        Keyword::Id(id)
    }
}

impl From<&str> for Keyword {
    fn from(text: &str) -> Self {
        Keyword::Text(text.to_string())
    }
}

impl From<String> for Keyword {
    fn from(text: String) -> Self {
        Keyword::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_is_text() {
        assert_eq!(
            Keyword::from("Emily".to_string()),
            Keyword::Text("Emily".to_string())
        );
    }

    #[test]
    fn test_numeric_text_stays_text() {
        assert!(matches!(Keyword::from("42"), Keyword::Text(_)));
    }

    #[test]
    fn test_deserialize_untagged() {
        let id: Keyword = serde_json::from_str("7").unwrap();
        let text: Keyword = serde_json::from_str("\"7\"").unwrap();

        assert_eq!(id, Keyword::Id(7));
        assert_eq!(text, Keyword::Text("7".to_string()));
    }
}
