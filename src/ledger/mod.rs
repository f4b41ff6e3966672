//! Domain models for bills, transactions, and their derived views.

pub mod bill;
pub mod book;
pub mod transaction;

pub use bill::{Bill, BillPatch, BillStatus};
pub use book::{BillBook, Totals};
pub use transaction::{SortOrder, Transaction, TransactionLog, TransactionStatus};
