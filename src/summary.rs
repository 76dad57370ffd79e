//! Aggregate statistics over a transaction store and their report rows.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Which of `debit` and `credit` occurs more often.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DominantType {
    Debit,
    Credit,
    Equal,
}

impl DominantType {
    pub fn from_counts(debits: usize, credits: usize) -> Self {
        match debits.cmp(&credits) {
            std::cmp::Ordering::Greater => DominantType::Debit,
            std::cmp::Ordering::Less => DominantType::Credit,
            std::cmp::Ordering::Equal => DominantType::Equal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DominantType::Debit => "debit",
            DominantType::Credit => "credit",
            DominantType::Equal => "equal",
        }
    }
}

impl fmt::Display for DominantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of every store-wide statistic.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub total_amount: Decimal,
    /// `None` for an empty store.
    pub average_amount: Option<Decimal>,
    pub total_debit_amount: Decimal,
    pub total_credit_amount: Decimal,
    pub busiest_month: Option<u32>,
    pub busiest_debit_month: Option<u32>,
    pub dominant_type: DominantType,
    pub unique_types: Vec<String>,
}

/// A `metric,value` line of the summary report.
#[derive(Debug, Serialize, PartialEq)]
pub struct ReportRow {
    pub metric: &'static str,
    pub value: String,
}

/// Value written for statistics that are undefined on the loaded data.
const UNDEFINED: &str = "n/a";
const AVERAGE_DP: u32 = 4;

impl Summary {
    /// Report rows in a fixed order. Decimals are normalized so `100.50` prints as `100.5`,
    /// the average is rounded to 4 decimal places.
    pub fn rows(&self) -> Vec<ReportRow> {
        fn row(metric: &'static str, value: impl ToString) -> ReportRow {
            ReportRow {
                metric,
                value: value.to_string(),
            }
        }
        fn or_undefined<T: ToString>(value: Option<T>) -> String {
            value.map_or_else(|| UNDEFINED.to_string(), |v| v.to_string())
        }

        vec![
            row("count", self.count),
            row("total_amount", self.total_amount.normalize()),
            row(
                "average_amount",
                or_undefined(
                    self.average_amount
                        .map(|avg| avg.round_dp(AVERAGE_DP).normalize()),
                ),
            ),
            row("total_debit_amount", self.total_debit_amount.normalize()),
            row("total_credit_amount", self.total_credit_amount.normalize()),
            row("busiest_month", or_undefined(self.busiest_month)),
            row("busiest_debit_month", or_undefined(self.busiest_debit_month)),
            row("dominant_type", self.dominant_type),
            row("unique_types", self.unique_types.join(";")),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_dominant_type_from_counts() {
        assert_eq!(DominantType::from_counts(3, 1), DominantType::Debit);
        assert_eq!(DominantType::from_counts(1, 3), DominantType::Credit);
        assert_eq!(DominantType::from_counts(2, 2), DominantType::Equal);
        assert_eq!(DominantType::from_counts(0, 0), DominantType::Equal);
    }

    #[test]
    fn test_dominant_type_display() {
        assert_eq!(DominantType::Debit.to_string(), "debit");
        assert_eq!(DominantType::Credit.to_string(), "credit");
        assert_eq!(DominantType::Equal.to_string(), "equal");
        assert_eq!(
            serde_json::to_string(&DominantType::Equal).unwrap(),
            "\"equal\""
        );
    }

    #[test]
    fn test_rows_for_empty_summary() {
        let summary = Summary {
            count: 0,
            total_amount: Decimal::ZERO,
            average_amount: None,
            total_debit_amount: Decimal::ZERO,
            total_credit_amount: Decimal::ZERO,
            busiest_month: None,
            busiest_debit_month: None,
            dominant_type: DominantType::Equal,
            unique_types: vec![],
        };
        let values: Vec<_> = summary.rows().into_iter().map(|r| r.value).collect();
        assert_eq!(values, vec!["0", "0", "n/a", "0", "0", "n/a", "n/a", "equal", ""]);
    }

    #[test]
    fn test_rows_normalize_and_round() {
        let summary = Summary {
            count: 3,
            total_amount: dec!(100.00),
            average_amount: Some(dec!(100) / dec!(3)),
            total_debit_amount: dec!(60.50),
            total_credit_amount: dec!(39.50),
            busiest_month: Some(2),
            busiest_debit_month: Some(11),
            dominant_type: DominantType::Debit,
            unique_types: vec!["debit".to_string(), "credit".to_string()],
        };
        let rows = summary.rows();
        assert_eq!(rows[1].value, "100");
        assert_eq!(rows[2].value, "33.3333");
        assert_eq!(rows[3].value, "60.5");
        assert_eq!(rows[6].value, "11");
        assert_eq!(rows[8].value, "debit;credit");
    }
}
