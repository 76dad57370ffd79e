//! The runner is responsible for loading a transaction file, building the
//! store, and writing the summary report to a writer.

use log::info;
use std::io::Write;
use std::path::Path;

use crate::{
    error::Result,
    loader::{read_transactions, write_csv, InputFormat},
    TransactionsStore,
};

/// Loads the input file, builds the store and writes the summary report to the provided writer.
///
/// # Arguments
/// * `input_path` - Path to the input file containing transactions
/// * `format` - Layout of the input file
/// * `writer` - Where to write the report (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * Any record is malformed
/// * Writing to the output fails
pub fn run<P, W>(input_path: P, format: InputFormat, writer: W) -> Result<TransactionsStore>
where
    P: AsRef<Path>,
    W: Write,
{
    let store = TransactionsStore::from_transactions(read_transactions(input_path, format)?);
    info!("Store ready with {} transactions", store.len());

    write_report(&store, writer)?;
    Ok(store)
}

/// Writes the store's summary as `metric,value` CSV rows.
pub fn write_report<W: Write>(store: &TransactionsStore, writer: W) -> Result<()> {
    write_csv(writer, store.summary().rows().into_iter())?;
    Ok(())
}
