// File: crates/chart-core/src/records.rs
// Summary: Decoding XP transaction records into chart series and per-project totals.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ChartError, Result};
use crate::series::{self, CategoryValue, DataPoint, Series};

/// One XP transaction as returned by the GraphQL endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub amount: f64,
    /// Slash-delimited object path, e.g. `/school/div-01/go-reloaded`.
    pub path: String,
    pub created_at: DateTime<Utc>,
}

// Every field optional so a missing one is reported by name instead of as a serde error.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransaction {
    amount: Option<f64>,
    path: Option<String>,
    created_at: Option<String>,
}

impl Transaction {
    fn from_raw(index: usize, raw: RawTransaction) -> Result<Self> {
        let amount = raw.amount.ok_or_else(|| ChartError::malformed(index, "missing field `amount`"))?;
        if !amount.is_finite() {
            return Err(ChartError::malformed(index, "`amount` is not finite"));
        }
        let path = raw.path.ok_or_else(|| ChartError::malformed(index, "missing field `path`"))?;
        let created = raw.created_at.ok_or_else(|| ChartError::malformed(index, "missing field `createdAt`"))?;
        let created_at = DateTime::parse_from_rfc3339(&created)
            .map_err(|e| ChartError::malformed(index, format!("bad `createdAt` '{created}': {e}")))?
            .with_timezone(&Utc);
        Ok(Self { amount, path, created_at })
    }

    /// `x` = creation time in epoch ms, `y` = amount, `label` = path.
    pub fn to_point(&self) -> DataPoint {
        DataPoint::new(self.created_at.timestamp_millis() as f64, self.amount, self.path.clone())
    }

    pub fn project(&self) -> &str {
        project_name(&self.path)
    }
}

/// Last segment of an object path.
pub fn project_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Decode a transaction list. Accepts a bare JSON array or the
/// `{"data": {"user": [{"transactions": [...]}]}}` response envelope.
/// The first malformed record rejects the whole document.
pub fn decode_transactions(json: &str) -> Result<Vec<Transaction>> {
    let doc: Value = serde_json::from_str(json)?;
    let list = match &doc {
        Value::Array(items) => items.as_slice(),
        _ => doc
            .pointer("/data/user/0/transactions")
            .or_else(|| doc.get("transactions"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or_else(|| ChartError::malformed(0, "document has no transactions array"))?,
    };
    transactions_from_values(list)
}

pub(crate) fn transactions_from_values(values: &[Value]) -> Result<Vec<Transaction>> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let raw: RawTransaction =
                serde_json::from_value(v.clone()).map_err(|e| ChartError::malformed(i, e.to_string()))?;
            Transaction::from_raw(i, raw)
        })
        .collect()
}

/// Time series of raw amounts, sorted by creation time.
pub fn xp_series(transactions: &[Transaction]) -> Series {
    Series::time(transactions.iter().map(Transaction::to_point).collect())
}

/// Raw amounts summed per project name.
pub fn xp_per_project(transactions: &[Transaction]) -> Vec<CategoryValue> {
    let values: Vec<CategoryValue> =
        transactions.iter().map(|t| CategoryValue::new(t.project(), t.amount)).collect();
    series::aggregate(&values)
}

/// Sum of all amounts.
pub fn total_amount(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.amount).sum()
}
