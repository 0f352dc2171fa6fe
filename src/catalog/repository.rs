use std::sync::Arc;

use rust_decimal::Decimal;

use crate::catalog::Book;

/// Read-only catalog of purchasable books.
///
/// The store is immutable after construction, so lookups need no locking; a
/// database-backed catalog can replace this without touching the callers.
#[derive(Clone)]
pub struct BookRepository {
    books: Arc<Vec<Book>>,
}

impl BookRepository {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(books),
        }
    }

    /// The built-in storefront catalog.
    pub fn seeded() -> Self {
        Self::new(vec![
            Book::new(
                "The Great Gatsby",
                "F. Scott Fitzgerald",
                "Fiction",
                Decimal::new(1099, 2),
                "/images/books/the_great_gatsby.jpg",
                "A classic American novel about the Jazz Age.",
            ),
            Book::new(
                "1984",
                "George Orwell",
                "Dystopia",
                Decimal::new(899, 2),
                "/images/books/1984.jpg",
                "A dystopian social science fiction novel.",
            ),
            Book::new(
                "I Ching",
                "King Wen of Zhou",
                "Traditional",
                Decimal::new(1899, 2),
                "/images/books/I-Ching.jpg",
                "An ancient Chinese divination text.",
            ),
            Book::new(
                "Moby Dick",
                "Herman Melville",
                "Adventure",
                Decimal::new(1249, 2),
                "/images/books/moby_dick.jpg",
                "An epic tale of Captain Ahab's quest for revenge.",
            ),
        ])
    }

    pub fn all(&self) -> Vec<Book> {
        self.books.as_ref().clone()
    }

    /// Exact-title lookup.
    pub fn find_by_title(&self, title: &str) -> Option<Book> {
        self.books.iter().find(|book| book.title == title).cloned()
    }

    /// Case-insensitive substring match over title, author, and category.
    pub fn search(&self, keyword: &str) -> Vec<Book> {
        let needle = keyword.to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
                    || book.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}
