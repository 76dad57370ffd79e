//! In-memory transaction history and the queries over it.
//!
//! Transactions are kept in insertion order, which is the only ordering the
//! store knows about. Every query is a fresh linear scan, nothing is cached
//! between calls, and the only mutation is [`TransactionsStore::append`].

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::dto::{Transaction, CREDIT, DEBIT};
use crate::summary::{DominantType, Summary};

#[derive(Debug, Default, Clone)]
pub struct TransactionsStore {
    transactions: Vec<Transaction>,
}

impl TransactionsStore {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
        }
    }

    /// Builds a store from already parsed records, keeping their order.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Adds a transaction to the end of the history.
    /// Ids are not checked for uniqueness.
    pub fn append(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Distinct type tags in first-seen order.
    pub fn unique_types(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.iter()
            .map(|tx| tx.tx_type.as_str())
            .filter(|tx_type| seen.insert(*tx_type))
            .collect()
    }

    /// Sum of all amounts. Clamps at `Decimal::MAX`/`Decimal::MIN` instead of overflowing.
    pub fn total_amount(&self) -> Decimal {
        saturating_sum(self.iter())
    }

    /// Sums amounts of transactions whose date matches every supplied component.
    /// `None` matches any value; `month` is 1-12.
    pub fn total_amount_by_date(
        &self,
        year: Option<i32>,
        month: Option<u32>,
        day: Option<u32>,
    ) -> Decimal {
        saturating_sum(self.iter().filter(|tx| {
            year.map_or(true, |y| tx.date.year() == y)
                && month.map_or(true, |m| tx.date.month() == m)
                && day.map_or(true, |d| tx.date.day() == d)
        }))
    }

    pub fn by_type(&self, tx_type: &str) -> Vec<&Transaction> {
        self.iter().filter(|tx| tx.tx_type == tx_type).collect()
    }

    /// Transactions dated within `[start, end]`, both ends inclusive.
    pub fn in_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Transaction> {
        self.iter()
            .filter(|tx| tx.date >= start && tx.date <= end)
            .collect()
    }

    pub fn by_merchant(&self, merchant: &str) -> Vec<&Transaction> {
        self.iter().filter(|tx| tx.merchant == merchant).collect()
    }

    /// Mean transaction amount, or `None` when the store is empty.
    pub fn average_amount(&self) -> Option<Decimal> {
        if self.is_empty() {
            return None;
        }
        Some(self.total_amount() / Decimal::from(self.len()))
    }

    /// Transactions with `min <= amount <= max`.
    pub fn by_amount_range(&self, min: Decimal, max: Decimal) -> Vec<&Transaction> {
        self.iter()
            .filter(|tx| tx.amount >= min && tx.amount <= max)
            .collect()
    }

    pub fn total_debit_amount(&self) -> Decimal {
        self.sum_by_type(DEBIT)
    }

    pub fn total_credit_amount(&self) -> Decimal {
        self.sum_by_type(CREDIT)
    }

    /// Month (1-12) holding the most transactions of any type.
    /// Ties go to the earliest month; `None` for an empty store.
    pub fn busiest_month(&self) -> Option<u32> {
        busiest_month_of(self.iter())
    }

    /// Same as [`busiest_month`](Self::busiest_month), counting debits only.
    pub fn busiest_debit_month(&self) -> Option<u32> {
        busiest_month_of(self.iter().filter(|tx| tx.is_debit()))
    }

    pub fn dominant_type(&self) -> DominantType {
        let debits = self.iter().filter(|tx| tx.is_debit()).count();
        let credits = self.iter().filter(|tx| tx.is_credit()).count();
        DominantType::from_counts(debits, credits)
    }

    /// Transactions dated strictly before `date`.
    pub fn before_date(&self, date: NaiveDate) -> Vec<&Transaction> {
        self.iter().filter(|tx| tx.date < date).collect()
    }

    /// First transaction in insertion order with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Transaction> {
        self.iter().find(|tx| tx.id == id)
    }

    /// One description per transaction, in insertion order.
    pub fn descriptions(&self) -> Vec<&str> {
        self.iter().map(|tx| tx.description.as_str()).collect()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            count: self.len(),
            total_amount: self.total_amount(),
            average_amount: self.average_amount(),
            total_debit_amount: self.total_debit_amount(),
            total_credit_amount: self.total_credit_amount(),
            busiest_month: self.busiest_month(),
            busiest_debit_month: self.busiest_debit_month(),
            dominant_type: self.dominant_type(),
            unique_types: self.unique_types().into_iter().map(String::from).collect(),
        }
    }

    fn sum_by_type(&self, tx_type: &str) -> Decimal {
        saturating_sum(self.iter().filter(|tx| tx.tx_type == tx_type))
    }
}

impl FromIterator<Transaction> for TransactionsStore {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self::from_transactions(iter.into_iter().collect())
    }
}

impl Extend<Transaction> for TransactionsStore {
    fn extend<I: IntoIterator<Item = Transaction>>(&mut self, iter: I) {
        for transaction in iter {
            self.append(transaction);
        }
    }
}

/// Adds amounts in order, pinning the running total at the `Decimal` bounds on overflow.
fn saturating_sum<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> Decimal {
    transactions.fold(Decimal::ZERO, |total, tx| total.saturating_add(tx.amount))
}

/// Counts per month and scans January to December, keeping the first maximum.
fn busiest_month_of<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> Option<u32> {
    let mut counts = [0usize; 12];
    for tx in transactions {
        counts[tx.date.month0() as usize] += 1;
    }

    let mut busiest: Option<(u32, usize)> = None;
    for (month0, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        if busiest.map_or(true, |(_, best)| count > best) {
            busiest = Some((month0 as u32 + 1, count));
        }
    }
    busiest.map(|(month, _)| month)
}
