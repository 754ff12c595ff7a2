//! Error handling for catalog operations and console input.

use std::fmt;

use thiserror::Error;

/// Why a book/member reference was rejected on issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceFault {
    UnknownBook(String),
    UnknownMember(String),
    NoCopiesAvailable(String),
}

impl fmt::Display for ReferenceFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBook(id) => write!(f, "unknown book '{id}'"),
            Self::UnknownMember(id) => write!(f, "unknown member '{id}'"),
            Self::NoCopiesAvailable(id) => write!(f, "no copies of book '{id}' available"),
        }
    }
}

/// Errors reported back to the console; none of them end the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("invalid reference: {0}")]
    InvalidReference(ReferenceFault),

    #[error("no open transaction for book '{book_id}' and member '{member_id}'")]
    NoMatchingTransaction { book_id: String, member_id: String },

    #[error("invalid date format: '{input}'")]
    InvalidDateFormat { input: String },

    #[error("invalid menu input: '{input}'")]
    InvalidMenuInput { input: String },

    #[error("invalid {field}: '{input}'")]
    InvalidInput { field: &'static str, input: String },
}

impl LibraryError {
    /// Create an unknown book error
    pub fn unknown_book(id: impl Into<String>) -> Self {
        Self::InvalidReference(ReferenceFault::UnknownBook(id.into()))
    }

    /// Create an unknown member error
    pub fn unknown_member(id: impl Into<String>) -> Self {
        Self::InvalidReference(ReferenceFault::UnknownMember(id.into()))
    }

    /// Create an error for a book with every copy on loan
    pub fn no_copies(id: impl Into<String>) -> Self {
        Self::InvalidReference(ReferenceFault::NoCopiesAvailable(id.into()))
    }

    /// Create a failed-return error
    pub fn no_matching_transaction(book_id: impl Into<String>, member_id: impl Into<String>) -> Self {
        Self::NoMatchingTransaction {
            book_id: book_id.into(),
            member_id: member_id.into(),
        }
    }

    /// Stable machine-readable code, used as a log field.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidReference(_) => "invalid_reference",
            Self::NoMatchingTransaction { .. } => "no_matching_transaction",
            Self::InvalidDateFormat { .. } => "invalid_date_format",
            Self::InvalidMenuInput { .. } => "invalid_menu_input",
            Self::InvalidInput { .. } => "invalid_input",
        }
    }

    /// Message printed to the console.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidReference(_) => "Invalid book or member ID, or book not available.",
            Self::NoMatchingTransaction { .. } => "No matching issued book found for return.",
            Self::InvalidDateFormat { .. } => "Invalid date format. Please use yyyy-MM-dd.",
            Self::InvalidMenuInput { .. } => "Invalid choice. Please try again.",
            Self::InvalidInput { .. } => "Invalid input. Please enter valid data.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_errors_share_code_and_message() {
        let errors = [
            LibraryError::unknown_book("9"),
            LibraryError::unknown_member("4"),
            LibraryError::no_copies("1"),
        ];
        for error in errors {
            assert_eq!(error.code(), "invalid_reference");
            assert_eq!(
                error.user_message(),
                "Invalid book or member ID, or book not available."
            );
        }
    }

    #[test]
    fn display_carries_the_fault() {
        let error = LibraryError::no_copies("1");
        assert_eq!(
            error.to_string(),
            "invalid reference: no copies of book '1' available"
        );

        let error = LibraryError::no_matching_transaction("2", "3");
        assert_eq!(
            error.to_string(),
            "no open transaction for book '2' and member '3'"
        );
    }

    #[test]
    fn input_errors_map_to_console_messages() {
        let error = LibraryError::InvalidDateFormat {
            input: "01/02/2024".to_string(),
        };
        assert_eq!(error.code(), "invalid_date_format");
        assert_eq!(error.user_message(), "Invalid date format. Please use yyyy-MM-dd.");

        let error = LibraryError::InvalidInput {
            field: "copies",
            input: "two".to_string(),
        };
        assert_eq!(error.to_string(), "invalid copies: 'two'");
        assert_eq!(error.user_message(), "Invalid input. Please enter valid data.");
    }
}
