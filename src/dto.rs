use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction type tag counted as money going out.
pub const DEBIT: &str = "debit";
/// Transaction type tag counted as money coming in.
pub const CREDIT: &str = "credit";

/// A single financial record as it appears in the input file.
///
/// Field names follow the input schema (`transaction_id`, `transaction_date`, ...).
/// The type tag is kept as a free string: `debit` and `credit` are the only values
/// the aggregations look at, anything else is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(rename = "transaction_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "transaction_date", deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    #[serde(rename = "transaction_amount")]
    pub amount: Decimal,
    #[serde(rename = "transaction_type")]
    pub tx_type: String,
    #[serde(rename = "transaction_description")]
    pub description: String,
    #[serde(rename = "merchant_name")]
    pub merchant: String,
    pub card_type: String,
}

impl Transaction {
    pub fn is_debit(&self) -> bool {
        self.tx_type == DEBIT
    }

    pub fn is_credit(&self) -> bool {
        self.tx_type == CREDIT
    }
}

/// Parses a transaction date.
///
/// Accepts `YYYY-MM-DD`, and date-time strings (`2019-01-01T10:00:00Z`,
/// `2019-01-01 10:00:00`) whose time part is dropped.
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    let value = value.trim();
    let date_part = match value.find(|c: char| c == 'T' || c == ' ') {
        Some(idx) => &value[..idx],
        None => value,
    };
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
}

pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(|e| de::Error::custom(format!("invalid date {:?}: {}", raw, e)))
}

/// Ids are strings; numeric ids in JSON input are turned into their decimal form.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl Visitor<'_> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or integer transaction id")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}
