//! Storage layer for loaded transactions ([`TransactionsStore`]).
//!
//! Current implementation is a single owned, insertion-ordered sequence with
//! synchronous, direct memory access.

mod transactions;

pub use transactions::TransactionsStore;
