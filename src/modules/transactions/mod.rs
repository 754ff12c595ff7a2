pub mod models;

use models::Transaction;

/// Append-only loan history in issue order.
#[derive(Debug, Default)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, transaction: Transaction) -> &Transaction {
        let position = self.entries.len();
        self.entries.push(transaction);
        &self.entries[position]
    }

    /// Earliest open loan for the pair, in append order.
    pub fn first_open_mut(&mut self, book_id: &str, member_id: &str) -> Option<&mut Transaction> {
        self.entries
            .iter_mut()
            .find(|tx| tx.is_open() && tx.matches(book_id, member_id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }

    pub fn open(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter().filter(|tx| tx.is_open())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
