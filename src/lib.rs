mod dto;
mod error;
pub mod loader;
mod runner;
mod stores;
mod summary;

pub use dto::{parse_date, Transaction, CREDIT, DEBIT};
pub use error::{Error, Result};
pub use loader::InputFormat;
pub use runner::{run, write_report};
pub use stores::TransactionsStore;
pub use summary::{DominantType, ReportRow, Summary};
