//! Cash ledger models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a cash transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }
}

/// A signed ledger entry; the only source of truth for the cash balance
///
/// The sign of `amount` must match `kind`: deposits are non-negative,
/// withdrawals negative. Entries are appended or removed, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashTransaction {
    pub id: Uuid,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// Draft cash transaction used for manual ledger adjustments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCashTransaction {
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_kind_serializes_as_type_field() {
        let tx = CashTransaction {
            id: Uuid::nil(),
            amount: -200.0,
            description: "Supplies purchase".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 3, 10).unwrap(),
            kind: TransactionKind::Withdrawal,
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "withdrawal");
        assert_eq!(json["amount"], -200.0);
        assert_eq!(json["date"], "2023-03-10");
    }
}
