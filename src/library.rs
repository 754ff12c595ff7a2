//! The catalog store and loan ledger behind the console.

use chrono::NaiveDate;

use crate::error::LibraryError;
use crate::modules::books::models::{Book, BookId, NewBook};
use crate::modules::books::BookCatalog;
use crate::modules::members::models::{Member, MemberId, NewMember};
use crate::modules::members::MemberRoster;
use crate::modules::transactions::models::Transaction;
use crate::modules::transactions::TransactionLog;
use crate::utils::format_date;

/// In-memory library: books, members and the loan ledger.
#[derive(Debug, Default)]
pub struct Library {
    books: BookCatalog,
    members: MemberRoster,
    ledger: TransactionLog,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book with every copy available. Duplicate ISBNs are accepted.
    pub fn add_book(&mut self, request: NewBook) -> BookId {
        let book = self.books.add(request);
        tracing::info!(
            book_id = %book.id,
            title = %book.title,
            copies = book.copies_total,
            "book added"
        );
        book.id.clone()
    }

    pub fn add_member(&mut self, request: NewMember) -> MemberId {
        let member = self.members.add(request);
        tracing::info!(member_id = %member.id, name = %member.name, "member added");
        member.id.clone()
    }

    /// Lend one copy of `book_id` to `member_id`.
    ///
    /// Fails without touching any state when either id is unknown or the
    /// book has no copy left.
    pub fn issue(
        &mut self,
        book_id: &str,
        member_id: &str,
        issued_on: NaiveDate,
    ) -> Result<&Transaction, LibraryError> {
        let book = self
            .books
            .get_mut(book_id)
            .ok_or_else(|| LibraryError::unknown_book(book_id))?;
        let member = self
            .members
            .get(member_id)
            .ok_or_else(|| LibraryError::unknown_member(member_id))?;

        if !book.lend_copy() {
            return Err(LibraryError::no_copies(book_id));
        }

        tracing::info!(
            book_id = %book.id,
            member_id = %member.id,
            issued_on = %format_date(issued_on),
            copies_available = book.copies_available,
            "book issued"
        );

        let transaction = Transaction::open(book.id.clone(), member.id.clone(), issued_on);
        Ok(self.ledger.append(transaction))
    }

    /// Close the earliest open loan for the pair and put the copy back.
    pub fn return_book(
        &mut self,
        book_id: &str,
        member_id: &str,
        returned_on: NaiveDate,
    ) -> Result<&Transaction, LibraryError> {
        let transaction = self
            .ledger
            .first_open_mut(book_id, member_id)
            .ok_or_else(|| LibraryError::no_matching_transaction(book_id, member_id))?;

        transaction.close(returned_on);
        if let Some(book) = self.books.get_mut(book_id) {
            book.restore_copy();
            tracing::info!(
                book_id = %book.id,
                member_id = %transaction.member_id,
                returned_on = %format_date(returned_on),
                copies_available = book.copies_available,
                "book returned"
            );
        }

        Ok(&*transaction)
    }

    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.get(id)
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.get(id)
    }

    /// Books in insertion order.
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Members in insertion order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// Every loan in issue order.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.ledger.iter()
    }

    pub fn open_transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.ledger.open()
    }
}
