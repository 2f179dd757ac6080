//! Grouping books by author.

use crate::types::{AuthorIndex, Book};

/// Separator between co-author names in [`Book::authors`].
pub const AUTHOR_DELIMITER: char = '-';

/// Build an [`AuthorIndex`] from `books`.
///
/// The authors field of each book is split on [`AUTHOR_DELIMITER`] and the book is appended under
/// every fragment, so a book with co-authors appears under each of them. Fragments are used
/// verbatim (no trimming), and books keep their input order within each author.
pub fn index_by_author(books: &[Book]) -> AuthorIndex {
    let mut index = AuthorIndex::new();
    for book in books {
        for author in book.authors().split(AUTHOR_DELIMITER) {
            index
                .entry(author.to_owned())
                .or_default()
                .push(book.clone());
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::index_by_author;
    use crate::types::{Book, BookFields};

    fn by(authors: &str) -> Book {
        Book::new(BookFields {
            authors: authors.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn splits_co_authors() {
        let books = vec![by("A"), by("A-B"), by("C"), by("C")];
        let index = index_by_author(&books);

        assert_eq!(index.len(), 3);
        assert_eq!(index["A"].len(), 2);
        assert_eq!(index["B"].len(), 1);
        assert_eq!(index["C"].len(), 2);
    }

    #[test]
    fn named_authors() {
        let books = vec![
            by("Arthur C. Clarke"),
            by("Arthur C. Clarke-Gentry Lee"),
            by("Gene Wolfe"),
            by("Gene Wolfe"),
            by("Stanislaw Lem"),
        ];
        let index = index_by_author(&books);

        assert_eq!(index["Gene Wolfe"].len(), 2);
        assert_eq!(index["Arthur C. Clarke"].len(), 2);
        assert_eq!(index["Stanislaw Lem"].len(), 1);
        assert_eq!(index["Gentry Lee"].len(), 1);
        assert_eq!(index["Gentry Lee"][0].authors(), "Arthur C. Clarke-Gentry Lee");
    }

    #[test]
    fn fragments_are_not_trimmed() {
        let books = vec![by("A - B"), by("A")];
        let index = index_by_author(&books);

        assert_eq!(index["A "].len(), 1);
        assert_eq!(index[" B"].len(), 1);
        assert_eq!(index["A"].len(), 1);
    }

    #[test]
    fn keeps_book_order_per_author() {
        let first = Book::new(BookFields {
            id: 1,
            authors: "A".to_string(),
            ..Default::default()
        });
        let second = Book::new(BookFields {
            id: 2,
            authors: "B-A".to_string(),
            ..Default::default()
        });
        let index = index_by_author(&[first, second]);
        let ids: Vec<i64> = index["A"].iter().map(Book::id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn empty_input_gives_empty_index() {
        assert!(index_by_author(&[]).is_empty());
    }
}
