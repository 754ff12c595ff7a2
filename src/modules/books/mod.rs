pub mod models;

use std::collections::HashMap;

use crate::utils::Sequence;
use models::{Book, BookId, NewBook};

/// Books in insertion order, with an id index for lookups.
#[derive(Debug, Default)]
pub struct BookCatalog {
    books: Vec<Book>,
    index: HashMap<String, usize>,
    ids: Sequence,
}

impl BookCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new book under the next identifier.
    pub fn add(&mut self, request: NewBook) -> &Book {
        let id = BookId::from(self.ids.advance());
        let position = self.books.len();
        self.index.insert(id.as_str().to_string(), position);
        self.books.push(Book::new(id, request));
        &self.books[position]
    }

    pub fn get(&self, id: &str) -> Option<&Book> {
        self.index.get(id).and_then(|&i| self.books.get(i))
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Book> {
        match self.index.get(id) {
            Some(&i) => self.books.get_mut(i),
            None => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_never_reused() {
        let mut catalog = BookCatalog::new();
        let first = catalog.add(NewBook::new("Dune", "Herbert", "ISBN1", 2)).id.clone();
        let second = catalog.add(NewBook::new("Dune", "Herbert", "ISBN1", 1)).id.clone();

        assert_eq!(first.as_str(), "1");
        assert_eq!(second.as_str(), "2");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut catalog = BookCatalog::new();
        for n in 0..12 {
            catalog.add(NewBook::new(format!("Title {n}"), "Author", "ISBN", 1));
        }
        let ids: Vec<_> = catalog.iter().map(|b| b.id.to_string()).collect();
        let expected: Vec<_> = (1..=12).map(|n| n.to_string()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn lookup_by_printed_id() {
        let mut catalog = BookCatalog::new();
        catalog.add(NewBook::new("Dune", "Herbert", "ISBN1", 2));

        assert_eq!(catalog.get("1").map(|b| b.title.as_str()), Some("Dune"));
        assert!(catalog.get("01").is_none());
        assert!(catalog.get("2").is_none());

        catalog.get_mut("1").unwrap().lend_copy();
        assert_eq!(catalog.get("1").unwrap().copies_available, 1);
    }
}
