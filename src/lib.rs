//! Libris application library
//!
//! Keeps a library's books, members and loans in memory and serves them
//! through an interactive text menu.

pub mod console;
pub mod error;
pub mod library;
pub mod modules;
pub mod utils;

pub use console::{menu::MenuChoice, Console, Flow};
pub use error::{LibraryError, ReferenceFault};
pub use library::Library;
pub use modules::books::models::{Book, BookId, NewBook};
pub use modules::members::models::{Member, MemberId, NewMember};
pub use modules::transactions::models::{Transaction, TransactionStatus};
