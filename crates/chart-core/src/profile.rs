// File: crates/chart-core/src/profile.rs
// Summary: User record decoding and the dashboard's profile summary figures.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ChartError, Result};
use crate::records::{self, Transaction};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAttrs {
    pub address_street: Option<String>,
    pub address_city: Option<String>,
    pub tel: Option<String>,
}

/// The `user` object of the dashboard query.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub attrs: UserAttrs,
    #[serde(default)]
    pub audit_ratio: f64,
    /// Bytes audited for others.
    #[serde(default)]
    pub total_up: f64,
    /// Bytes received from others' audits.
    #[serde(default)]
    pub total_down: f64,
    #[serde(default)]
    transactions: Vec<Value>,
}

impl UserRecord {
    pub fn transactions(&self) -> Result<Vec<Transaction>> {
        records::transactions_from_values(&self.transactions)
    }
}

/// Decode a user from the response envelope (`data.user[0]`) or a bare object.
pub fn decode_user(json: &str) -> Result<UserRecord> {
    let doc: Value = serde_json::from_str(json)?;
    let user = doc
        .pointer("/data/user/0")
        .cloned()
        .or_else(|| doc.is_object().then(|| doc.clone()))
        .ok_or_else(|| ChartError::malformed(0, "document has no user object"))?;
    Ok(serde_json::from_value(user)?)
}

/// Highest project level from the level query response (`data.transaction[0].amount`).
/// A response without level transactions yields `None`.
pub fn decode_level(json: &str) -> Result<Option<f64>> {
    let doc: Value = serde_json::from_str(json)?;
    let list = doc
        .pointer("/data/transaction")
        .and_then(Value::as_array)
        .ok_or_else(|| ChartError::malformed(0, "document has no transaction array"))?;
    let Some(first) = list.first() else { return Ok(None) };
    match first.get("amount").and_then(Value::as_f64) {
        Some(level) if level.is_finite() => Ok(Some(level)),
        _ => Err(ChartError::malformed(0, "level transaction has no numeric `amount`")),
    }
}

/// Bytes → megabytes, rounded to two decimals.
pub fn bytes_to_mb(bytes: f64) -> f64 {
    let mb = bytes / 1_000_000.0;
    to_fixed(mb, 2).parse().unwrap_or(mb)
}

/// `v` with `digits` decimals, rounded on its exact binary value.
/// Exact ties round away from zero; `1.005` (really 1.00499…) gives `1.00`.
pub fn to_fixed(v: f64, digits: usize) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    // an exact decimal tie at `digits` places is an odd multiple of 2^-(digits+1)
    let halves = v * 2f64.powi(digits as i32 + 1);
    if halves.fract() == 0.0 && halves % 2.0 != 0.0 {
        let scale = 10f64.powi(digits as i32);
        let n = (v * scale).abs().ceil().copysign(v);
        return format!("{:.*}", digits, n / scale);
    }
    format!("{v:.digits$}")
}

/// Figures shown beside the charts.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileSummary {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub address: Option<String>,
    pub tel: Option<String>,
    /// Total XP in kB, rounded up.
    pub total_xp_kb: f64,
    pub level: String,
    /// Audit ratio with three decimals.
    pub audit_ratio: String,
    pub given_mb: f64,
    pub received_mb: f64,
}

impl ProfileSummary {
    /// `level` is the highest project level, `None` when the user has none.
    pub fn from_user(user: &UserRecord, transactions: &[Transaction], level: Option<f64>) -> Self {
        let address = match (&user.attrs.address_street, &user.attrs.address_city) {
            (Some(street), Some(city)) => Some(format!("{street}, {city}")),
            (Some(one), None) | (None, Some(one)) => Some(one.clone()),
            (None, None) => None,
        };
        Self {
            id: user.id,
            full_name: format!("{} {}", user.first_name, user.last_name).trim().to_string(),
            email: user.email.clone(),
            address,
            tel: user.attrs.tel.clone(),
            total_xp_kb: (records::total_amount(transactions) / 1000.0).ceil(),
            level: level.map(|l| l.to_string()).unwrap_or_else(|| "N/A".to_string()),
            audit_ratio: to_fixed(user.audit_ratio, 3),
            given_mb: bytes_to_mb(user.total_up),
            received_mb: bytes_to_mb(user.total_down),
        }
    }

    /// `(given, received)` magnitudes for the ratio chart.
    pub fn ratio_magnitudes(&self) -> (f64, f64) {
        (self.given_mb, self.received_mb)
    }
}
