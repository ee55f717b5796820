//! Book identity for the catalog surface.
//!
//! Catalog IDs are MD5 over `isbn + publish_date`, a legacy identifier
//! scheme for deduplicating catalog entries. It is unrelated to the
//! chain's BLAKE3 commitments and carries no tamper-evidence.

use circ_types::Book;
use md5::{Digest, Md5};

/// Derive and assign the catalog ID for a book.
pub fn assign_id(book: &mut Book) {
    let mut hasher = Md5::new();
    hasher.update(book.isbn.as_bytes());
    hasher.update(book.publish_date.as_bytes());
    book.id = hex::encode(hasher.finalize());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            id: String::new(),
            title: "Sample Book".into(),
            author: "John Doe".into(),
            publish_date: "2022-01-01".into(),
            isbn: "123456789".into(),
        }
    }

    #[test]
    fn id_is_md5_of_isbn_and_publish_date() {
        let mut book = sample_book();
        assign_id(&mut book);
        // md5("1234567892022-01-01")
        assert_eq!(book.id, "88f7424ac84de359ab2fa53de714abd4");
    }

    #[test]
    fn same_isbn_and_date_collide_on_purpose() {
        let mut first = sample_book();
        let mut second = sample_book();
        second.title = "Retitled Edition".into();
        assign_id(&mut first);
        assign_id(&mut second);
        assert_eq!(first.id, second.id);
    }
}
