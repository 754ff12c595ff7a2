//! Line-oriented menu dispatcher.
//!
//! Reads a choice, prompts for the fields that command needs, runs it
//! against the [`Library`] and writes the outcome. Rejected commands are
//! reported and the loop carries on; only Exit, end of input or an I/O
//! failure stop it.

pub mod menu;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use libris_kernel::ConsoleSettings;
use thiserror::Error;

use crate::error::LibraryError;
use crate::library::Library;
use crate::modules::books::models::NewBook;
use crate::modules::members::models::NewMember;
use crate::utils::parse_date;
use menu::MenuChoice;

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Error)]
enum ConsoleError {
    #[error(transparent)]
    Rejected(#[from] LibraryError),

    #[error("console i/o failed")]
    Io(#[from] io::Error),

    #[error("input closed")]
    Closed,
}

pub struct Console<R, W> {
    library: Library,
    input: R,
    output: W,
    settings: ConsoleSettings,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(library: Library, input: R, output: W) -> Self {
        Self {
            library,
            input,
            output,
            settings: ConsoleSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ConsoleSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn into_parts(self) -> (Library, W) {
        (self.library, self.output)
    }

    /// Serve commands until Exit or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(ConsoleError::Rejected(error)) => self
                    .report(&error)
                    .with_context(|| "failed to write to console")?,
                Err(ConsoleError::Closed) => {
                    tracing::info!("input closed, leaving menu");
                    return Ok(());
                }
                Err(ConsoleError::Io(error)) => {
                    return Err(error).with_context(|| "console i/o failed");
                }
            }
        }
    }

    fn step(&mut self) -> Result<Flow, ConsoleError> {
        if self.settings.show_menu {
            self.print_menu()?;
        }
        let choice: MenuChoice = self.prompt("Enter your choice: ")?.parse()?;
        tracing::debug!(choice = choice.label(), "menu choice");
        self.dispatch(choice)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow, ConsoleError> {
        match choice {
            MenuChoice::AddBook => self.add_book()?,
            MenuChoice::AddMember => self.add_member()?,
            MenuChoice::IssueBook => self.issue_book()?,
            MenuChoice::ReturnBook => self.return_book()?,
            MenuChoice::ListBooks => self.list_books()?,
            MenuChoice::ListMembers => self.list_members()?,
            MenuChoice::ListTransactions => self.list_transactions()?,
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                self.output.flush()?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{} Menu:", self.settings.title)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    /// Print `label` and read one line without its terminator.
    fn prompt(&mut self, label: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(line)
    }

    fn report(&mut self, error: &LibraryError) -> io::Result<()> {
        tracing::warn!(code = error.code(), error = %error, "command rejected");
        writeln!(self.output, "{}", error.user_message())
    }

    fn add_book(&mut self) -> Result<(), ConsoleError> {
        let title = self.prompt("Enter book title: ")?;
        let author = self.prompt("Enter author: ")?;
        let isbn = self.prompt("Enter ISBN: ")?;
        let raw_copies = self.prompt("Enter number of copies: ")?;
        let copies = raw_copies
            .trim()
            .parse::<u32>()
            .map_err(|_| LibraryError::InvalidInput {
                field: "copies",
                input: raw_copies.trim().to_string(),
            })?;

        let id = self
            .library
            .add_book(NewBook::new(title, author, isbn, copies));
        writeln!(self.output, "Book added with ID: {id}")?;
        Ok(())
    }

    fn add_member(&mut self) -> Result<(), ConsoleError> {
        let name = self.prompt("Enter member name: ")?;
        let address = self.prompt("Enter address: ")?;
        let phone = self.prompt("Enter phone: ")?;

        let id = self.library.add_member(NewMember::new(name, address, phone));
        writeln!(self.output, "Member added with ID: {id}")?;
        Ok(())
    }

    fn issue_book(&mut self) -> Result<(), ConsoleError> {
        let book_id = self.prompt("Enter book ID: ")?;
        let member_id = self.prompt("Enter member ID: ")?;
        let issued_on = parse_date(&self.prompt("Enter issue date (yyyy-MM-dd): ")?)?;

        let transaction = self
            .library
            .issue(book_id.trim(), member_id.trim(), issued_on)?;
        writeln!(self.output, "Book issued: {transaction}")?;
        Ok(())
    }

    fn return_book(&mut self) -> Result<(), ConsoleError> {
        let book_id = self.prompt("Enter book ID: ")?;
        let member_id = self.prompt("Enter member ID: ")?;
        let returned_on = parse_date(&self.prompt("Enter return date (yyyy-MM-dd): ")?)?;

        let transaction = self
            .library
            .return_book(book_id.trim(), member_id.trim(), returned_on)?;
        writeln!(self.output, "Book returned: {transaction}")?;
        Ok(())
    }

    fn list_books(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Books:")?;
        for book in self.library.books() {
            writeln!(self.output, "{book}")?;
        }
        Ok(())
    }

    fn list_members(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Members:")?;
        for member in self.library.members() {
            writeln!(self.output, "{member}")?;
        }
        Ok(())
    }

    fn list_transactions(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Transactions:")?;
        for transaction in self.library.transactions() {
            writeln!(self.output, "{transaction}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn quiet() -> ConsoleSettings {
        ConsoleSettings {
            show_menu: false,
            ..ConsoleSettings::default()
        }
    }

    fn session(input: &str) -> (Library, String) {
        let mut console =
            Console::new(Library::new(), Cursor::new(input.to_string()), Vec::new()).with_settings(quiet());
        console.run().unwrap();
        let (library, output) = console.into_parts();
        (library, String::from_utf8(output).unwrap())
    }

    const SETUP: &str = "1\nDune\nHerbert\nISBN1\n2\n2\nAda\n1 Main St\n555-0100\n";

    #[test]
    fn adds_and_lists_records() {
        let (library, out) = session(&format!("{SETUP}5\n6\n8\n"));

        assert!(out.contains("Book added with ID: 1\n"));
        assert!(out.contains("Member added with ID: 1\n"));
        assert!(out.contains(
            "\nBooks:\nID: 1, Title: Dune, Author: Herbert, ISBN: ISBN1, Available Copies: 2, Total Copies: 2\n"
        ));
        assert!(out.contains("\nMembers:\nID: 1, Name: Ada, Address: 1 Main St, Phone: 555-0100\n"));
        assert!(out.ends_with("Enter your choice: Exiting...\n"));
        assert_eq!(library.books().count(), 1);
    }

    #[test]
    fn prompts_in_order_for_add_book() {
        let (_, out) = session("1\nDune\nHerbert\nISBN1\n2\n8\n");
        assert!(out.starts_with(
            "Enter your choice: Enter book title: Enter author: Enter ISBN: Enter number of copies: Book added with ID: 1\n"
        ));
    }

    #[test]
    fn issue_and_return_round_trip() {
        let input = format!(
            "{SETUP}3\n1\n1\n2024-01-01\n3\n1\n1\n2024-01-02\n3\n1\n1\n2024-01-03\n4\n1\n1\n2024-02-01\n7\n8\n"
        );
        let (library, out) = session(&input);

        assert!(out.contains(
            "Book issued: Book ID: 1, Member ID: 1, Issue Date: 2024-01-01, Not Returned\n"
        ));
        assert!(out.contains("Invalid book or member ID, or book not available.\n"));
        assert!(out.contains(
            "Book returned: Book ID: 1, Member ID: 1, Issue Date: 2024-01-01, Return Date: 2024-02-01\n"
        ));
        assert!(out.contains(
            "\nTransactions:\n\
             Book ID: 1, Member ID: 1, Issue Date: 2024-01-01, Return Date: 2024-02-01\n\
             Book ID: 1, Member ID: 1, Issue Date: 2024-01-02, Not Returned\n"
        ));
        assert_eq!(library.book("1").unwrap().copies_available, 1);
    }

    #[test]
    fn reports_errors_and_keeps_going() {
        let input = format!("{SETUP}9\nabc\n3\n1\n1\n01/01/2024\n4\n1\n1\n2024-01-01\n1\nT\nA\nI\nmany\n8\n");
        let (library, out) = session(&input);

        assert_eq!(out.matches("Invalid choice. Please try again.\n").count(), 2);
        assert!(out.contains("Invalid date format. Please use yyyy-MM-dd.\n"));
        assert!(out.contains("No matching issued book found for return.\n"));
        assert!(out.contains("Invalid input. Please enter valid data.\n"));
        assert!(out.ends_with("Exiting...\n"));
        assert_eq!(library.transactions().count(), 0);
        assert_eq!(library.books().count(), 1);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let (library, out) = session("1\nDune\nHerbert\n");
        assert!(out.ends_with("Enter ISBN: "));
        assert_eq!(library.books().count(), 0);
    }

    #[test]
    fn menu_is_printed_with_configured_title() {
        let settings = ConsoleSettings {
            show_menu: true,
            title: "Branch Library".to_string(),
        };
        let mut console = Console::new(Library::new(), Cursor::new("8\n"), Vec::new()).with_settings(settings);
        console.run().unwrap();
        let (_, output) = console.into_parts();
        let out = String::from_utf8(output).unwrap();

        assert!(out.starts_with("\nBranch Library Menu:\n1. Add Book\n2. Add Member\n"));
        assert!(out.contains("7. List Transactions\n8. Exit\nEnter your choice: Exiting...\n"));
    }

    #[test]
    fn ids_and_dates_tolerate_surrounding_whitespace() {
        let input = format!("{SETUP}3\n 1 \n1\r\n 2024-05-06 \n8\n");
        let (library, out) = session(&input);
        assert!(out.contains("Book issued: Book ID: 1, Member ID: 1, Issue Date: 2024-05-06, Not Returned\n"));
        assert_eq!(library.open_transactions().count(), 1);
    }
}
