//! Proxy Pattern
//!
//! A stand-in with the same interface as the real object, adding a layer of
//! control in front of it. This one counts how often the content is accessed.
//!
//! Run with: cargo run --bin proxy

use std::cell::Cell;

use crate::error::Result;
use crate::transcript::Transcript;

pub trait Book {
    fn display_content(&self) -> Vec<String>;
}

pub struct RealBook {
    content: String,
}

impl RealBook {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Book for RealBook {
    fn display_content(&self) -> Vec<String> {
        vec![self.content.clone()]
    }
}

pub struct BookProxy<B: Book> {
    real_book: B,
    access_count: Cell<u32>,
}

impl<B: Book> BookProxy<B> {
    pub fn new(real_book: B) -> Self {
        Self {
            real_book,
            access_count: Cell::new(0),
        }
    }

    pub fn access_count(&self) -> u32 {
        self.access_count.get()
    }
}

impl<B: Book> Book for BookProxy<B> {
    fn display_content(&self) -> Vec<String> {
        let count = self.access_count.get() + 1;
        self.access_count.set(count);

        let mut lines = vec![format!("Displaying content for the {} time(s).", count)];
        lines.extend(self.real_book.display_content());
        lines
    }
}

pub fn demo() -> Result<Transcript> {
    let mut out = Transcript::new();

    let proxy_book = BookProxy::new(RealBook::new("The contents of the book."));
    out.extend(proxy_book.display_content());
    out.extend(proxy_book.display_content());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_book_shows_its_content() {
        assert_eq!(RealBook::new("abc").display_content(), vec!["abc"]);
    }

    #[test]
    fn test_proxy_counts_accesses() {
        let proxy = BookProxy::new(RealBook::new("text"));
        assert_eq!(proxy.access_count(), 0);
        for _ in 0..3 {
            proxy.display_content();
        }
        assert_eq!(proxy.access_count(), 3);
    }

    #[test]
    fn test_proxies_nest() {
        let outer = BookProxy::new(BookProxy::new(RealBook::new("text")));
        assert_eq!(
            outer.display_content(),
            vec![
                "Displaying content for the 1 time(s).",
                "Displaying content for the 1 time(s).",
                "text",
            ]
        );
    }

    #[test]
    fn test_demo_transcript() {
        assert_eq!(
            demo().unwrap().lines(),
            [
                "Displaying content for the 1 time(s).",
                "The contents of the book.",
                "Displaying content for the 2 time(s).",
                "The contents of the book.",
            ]
        );
    }
}
