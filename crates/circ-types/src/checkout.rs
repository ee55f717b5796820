use serde::{Deserialize, Serialize};

/// A book checkout event, the payload carried by every ledger block.
///
/// The chain treats this record as opaque except for `is_genesis`, which
/// marks the synthetic payload of the chain's first block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRecord {
    pub book_id: String,
    pub user: String,
    pub checkout_date: String,
    #[serde(default)]
    pub is_genesis: bool,
}

impl CheckoutRecord {
    /// A checkout of `book_id` by `user` on `checkout_date`.
    pub fn new(
        book_id: impl Into<String>,
        user: impl Into<String>,
        checkout_date: impl Into<String>,
    ) -> Self {
        Self {
            book_id: book_id.into(),
            user: user.into(),
            checkout_date: checkout_date.into(),
            is_genesis: false,
        }
    }

    /// The synthetic payload of the genesis block.
    pub fn genesis() -> Self {
        Self {
            is_genesis: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_is_flagged() {
        let record = CheckoutRecord::genesis();
        assert!(record.is_genesis);
        assert!(record.book_id.is_empty());
    }

    #[test]
    fn new_checkout_is_not_genesis() {
        let record = CheckoutRecord::new("456", "Jane Doe", "2022-01-03");
        assert!(!record.is_genesis);
        assert_eq!(record.book_id, "456");
    }

    #[test]
    fn wire_field_names() {
        let record = CheckoutRecord::new("123", "John Doe", "2022-01-02");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["book_id"], "123");
        assert_eq!(json["user"], "John Doe");
        assert_eq!(json["checkout_date"], "2022-01-02");
        assert_eq!(json["is_genesis"], false);
    }

    #[test]
    fn is_genesis_defaults_to_false() {
        let record: CheckoutRecord = serde_json::from_str(
            r#"{"book_id":"1","user":"u","checkout_date":"2022-01-01"}"#,
        )
        .unwrap();
        assert!(!record.is_genesis);
    }
}
