pub mod books;
pub mod members;
pub mod transactions;
