use std::str::FromStr;

use crate::error::LibraryError;

/// One entry of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    AddMember,
    IssueBook,
    ReturnBook,
    ListBooks,
    ListMembers,
    ListTransactions,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 8] = [
        Self::AddBook,
        Self::AddMember,
        Self::IssueBook,
        Self::ReturnBook,
        Self::ListBooks,
        Self::ListMembers,
        Self::ListTransactions,
        Self::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::AddBook => 1,
            Self::AddMember => 2,
            Self::IssueBook => 3,
            Self::ReturnBook => 4,
            Self::ListBooks => 5,
            Self::ListMembers => 6,
            Self::ListTransactions => 7,
            Self::Exit => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AddBook => "Add Book",
            Self::AddMember => "Add Member",
            Self::IssueBook => "Issue Book",
            Self::ReturnBook => "Return Book",
            Self::ListBooks => "List Books",
            Self::ListMembers => "List Members",
            Self::ListTransactions => "List Transactions",
            Self::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = LibraryError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let invalid = || LibraryError::InvalidMenuInput {
            input: trimmed.to_string(),
        };
        let number: u8 = trimmed.parse().map_err(|_| invalid())?;
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_listed_number() {
        for choice in MenuChoice::ALL {
            let parsed: MenuChoice = format!(" {}\n", choice.number()).parse().unwrap();
            assert_eq!(parsed, choice);
        }
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        for input in ["0", "9", "-1", "256", "two", "", "1.5"] {
            let err = input.parse::<MenuChoice>().unwrap_err();
            assert_eq!(err.code(), "invalid_menu_input", "input {input:?}");
        }
    }
}
