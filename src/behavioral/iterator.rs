//! Iterator Pattern
//!
//! Sequential traversal of a collection without exposing how it is stored.
//! In Rust the pattern is the `Iterator` trait itself; the collection hands out
//! a dedicated iterator type through `IntoIterator`.
//!
//! Run with: cargo run --bin iterator

use std::fmt;

use crate::error::Result;
use crate::transcript::Transcript;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
}

impl Book {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[derive(Debug, Default)]
pub struct BookCollection {
    books: Vec<Book>,
}

impl BookCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_book(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn iter(&self) -> BookIterator<'_> {
        BookIterator {
            books: &self.books,
            index: 0,
        }
    }
}

/// Cursor over a borrowed collection.
pub struct BookIterator<'a> {
    books: &'a [Book],
    index: usize,
}

impl<'a> Iterator for BookIterator<'a> {
    type Item = &'a Book;

    fn next(&mut self) -> Option<Self::Item> {
        let book = self.books.get(self.index)?;
        self.index += 1;
        Some(book)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.books.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BookIterator<'_> {}

impl<'a> IntoIterator for &'a BookCollection {
    type Item = &'a Book;
    type IntoIter = BookIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let mut collection = BookCollection::new();
    collection.add_book(Book::new("1984"));
    collection.add_book(Book::new("To Kill a Mockingbird"));
    collection.add_book(Book::new("The Great Gatsby"));

    for book in &collection {
        out.line(book.to_string());
    }
    Ok(out)
}
