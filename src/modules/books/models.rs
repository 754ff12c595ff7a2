use std::fmt;

/// Sequentially assigned book identifier, kept in its printed form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(String);

impl BookId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for BookId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalogued title and its copy counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub copies_total: u32,
    /// Always within `0..=copies_total`.
    pub copies_available: u32,
}

impl Book {
    pub fn new(id: BookId, request: NewBook) -> Self {
        Self {
            id,
            title: request.title,
            author: request.author,
            isbn: request.isbn,
            copies_total: request.copies,
            copies_available: request.copies,
        }
    }

    /// Take one copy off the shelf. Returns `false` when none is left.
    pub fn lend_copy(&mut self) -> bool {
        match self.copies_available.checked_sub(1) {
            Some(remaining) => {
                self.copies_available = remaining;
                true
            }
            None => false,
        }
    }

    /// Put one copy back, never exceeding the owned count.
    pub fn restore_copy(&mut self) {
        if self.copies_available < self.copies_total {
            self.copies_available += 1;
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, ISBN: {}, Available Copies: {}, Total Copies: {}",
            self.id, self.title, self.author, self.isbn, self.copies_available, self.copies_total
        )
    }
}

/// Request model for adding a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub copies: u32,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        copies: u32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            copies,
        }
    }
}
