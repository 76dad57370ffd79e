//! Reading transactions from JSON or CSV files, and writing CSV output.
//!
//! Loading is all-or-nothing: the first malformed record fails the whole file.

use chrono::NaiveDate;
use log::{debug, info};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use crate::dto::{deserialize_date, Transaction};
use crate::error::Result;

/// On-disk layout of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// A single JSON array of transaction objects.
    Json,
    /// A CSV file with one header row using the JSON field names.
    Csv,
}

impl InputFormat {
    /// `.csv` files are CSV, everything else is treated as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => InputFormat::Csv,
            _ => InputFormat::Json,
        }
    }
}

/// CSV flavour of [`Transaction`].
///
/// The CSV deserializer guesses numeric types for untyped fields, which would
/// turn an id like `007` into `7`, so ids are read as plain strings here.
#[derive(Debug, Deserialize)]
struct CsvTransaction {
    transaction_id: String,
    #[serde(deserialize_with = "deserialize_date")]
    transaction_date: NaiveDate,
    transaction_amount: Decimal,
    transaction_type: String,
    transaction_description: String,
    merchant_name: String,
    card_type: String,
}

impl From<CsvTransaction> for Transaction {
    fn from(row: CsvTransaction) -> Self {
        Transaction {
            id: row.transaction_id,
            date: row.transaction_date,
            amount: row.transaction_amount,
            tx_type: row.transaction_type,
            description: row.transaction_description,
            merchant: row.merchant_name,
            card_type: row.card_type,
        }
    }
}

/// Reads a JSON array from a file, deserializing each element into type T.
pub fn read_json<T, P>(path: P) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Creates an iterator that reads transactions from a CSV file.
pub fn read_csv<P>(path: P) -> csv::Result<impl Iterator<Item = csv::Result<Transaction>>>
where
    P: AsRef<Path>,
{
    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?
        .into_deserialize::<CsvTransaction>()
        .map(|row| row.map(Transaction::from)))
}

/// Loads every transaction from `path` in file order.
pub fn read_transactions<P>(path: P, format: InputFormat) -> Result<Vec<Transaction>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!("Reading {:?} as {:?}", path, format);
    let transactions = match format {
        InputFormat::Json => read_json(path)?,
        InputFormat::Csv => read_csv(path)?.collect::<csv::Result<Vec<_>>>()?,
    };
    info!("Loaded {} transactions from {:?}", transactions.len(), path);
    Ok(transactions)
}

/// Writes an iterator of records to a CSV writer.
/// Each record must implement Serialize.
pub fn write_csv<T, W>(writer: W, records: impl Iterator<Item = T>) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
