use std::fmt;

use chrono::NaiveDate;

use crate::modules::books::models::BookId;
use crate::modules::members::models::MemberId;
use crate::utils::format_date;

/// Lifecycle of a loan. `Open` moves to `Closed` once and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Open,
    Closed,
}

/// One loan of one copy to one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub issued_on: NaiveDate,
    pub returned_on: Option<NaiveDate>,
}

impl Transaction {
    pub fn open(book_id: BookId, member_id: MemberId, issued_on: NaiveDate) -> Self {
        Self {
            book_id,
            member_id,
            issued_on,
            returned_on: None,
        }
    }

    pub fn status(&self) -> TransactionStatus {
        match self.returned_on {
            Some(_) => TransactionStatus::Closed,
            None => TransactionStatus::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status() == TransactionStatus::Open
    }

    pub fn matches(&self, book_id: &str, member_id: &str) -> bool {
        self.book_id.as_str() == book_id && self.member_id.as_str() == member_id
    }

    /// Record the return date. A closed transaction is left untouched.
    pub fn close(&mut self, returned_on: NaiveDate) -> bool {
        if self.is_open() {
            self.returned_on = Some(returned_on);
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book ID: {}, Member ID: {}, Issue Date: {}",
            self.book_id,
            self.member_id,
            format_date(self.issued_on)
        )?;
        match self.returned_on {
            Some(date) => write!(f, ", Return Date: {}", format_date(date)),
            None => f.write_str(", Not Returned"),
        }
    }
}
