use serde::{Deserialize, Serialize};

/// A catalog entry for a book that can be checked out.
///
/// The `id` is assigned by the catalog boundary (see `circ-server`); it is
/// unrelated to the chain's block hashes and plays no part in chain
/// integrity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub author: String,
    pub publish_date: String,
    pub isbn: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_defaults_to_empty_on_deserialize() {
        let book: Book = serde_json::from_str(
            r#"{"title":"Sample Book","author":"John Doe","publish_date":"2022-01-01","isbn":"123456789"}"#,
        )
        .unwrap();
        assert!(book.id.is_empty());
        assert_eq!(book.title, "Sample Book");
    }
}
