//! Whole-store snapshot: the persistence exchange format

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CashTransaction, Expense, Item, Purchase, TransactionKind, User};

/// All five collections as one JSON-serializable document.
///
/// Every field defaults to an empty sequence so partially written backends
/// still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub purchases: Vec<Purchase>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub cash_transactions: Vec<CashTransaction>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
            && self.items.is_empty()
            && self.purchases.is_empty()
            && self.expenses.is_empty()
            && self.cash_transactions.is_empty()
    }

    /// Sample data for first-run seeding of an empty backing store.
    pub fn demo() -> Self {
        let users: Vec<User> = [
            ("Ahmed Mohamed", "Production"),
            ("Fatma Ali", "Administration"),
            ("Mahmoud Khaled", "Maintenance"),
            ("Sara Ahmed", "Human Resources"),
        ]
        .into_iter()
        .map(|(name, department)| User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            department: department.to_string(),
        })
        .collect();

        let items: Vec<Item> = [
            ("Coffee", 10.0, 15.0, "Drinks", 20),
            ("Sandwich", 25.0, 35.0, "Food", 15),
            ("Chips", 7.0, 10.0, "Snacks", 30),
            ("Mineral Water", 3.0, 5.0, "Drinks", 50),
        ]
        .into_iter()
        .map(|(name, purchase_price, price, category, amount)| Item {
            id: Uuid::new_v4(),
            name: name.to_string(),
            purchase_price,
            price,
            category: category.to_string(),
            amount,
        })
        .collect();

        let purchases = vec![
            Purchase {
                id: Uuid::new_v4(),
                user_id: users[0].id,
                item_id: items[0].id,
                quantity: 2,
                date: demo_date(2023, 3, 15),
                total: 30.0,
            },
            Purchase {
                id: Uuid::new_v4(),
                user_id: users[1].id,
                item_id: items[2].id,
                quantity: 1,
                date: demo_date(2023, 3, 15),
                total: 10.0,
            },
            Purchase {
                id: Uuid::new_v4(),
                user_id: users[2].id,
                item_id: items[1].id,
                quantity: 1,
                date: demo_date(2023, 3, 16),
                total: 35.0,
            },
        ];

        let expenses = vec![
            Expense {
                id: Uuid::new_v4(),
                name: "Sugar".to_string(),
                amount: 50.0,
                date: demo_date(2023, 3, 15),
                category: "Supplies".to_string(),
            },
            Expense {
                id: Uuid::new_v4(),
                name: "Soap".to_string(),
                amount: 30.0,
                date: demo_date(2023, 3, 16),
                category: "Cleaning".to_string(),
            },
        ];

        let cash_transactions = vec![
            CashTransaction {
                id: Uuid::new_v4(),
                amount: 1000.0,
                description: "Opening capital".to_string(),
                date: demo_date(2023, 3, 1),
                kind: TransactionKind::Deposit,
            },
            CashTransaction {
                id: Uuid::new_v4(),
                amount: -200.0,
                description: "Supplies purchase".to_string(),
                date: demo_date(2023, 3, 10),
                kind: TransactionKind::Withdrawal,
            },
        ];

        Self {
            users,
            items,
            purchases,
            expenses,
            cash_transactions,
        }
    }
}

fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        assert!(Snapshot::default().is_empty());
        assert!(!Snapshot::demo().is_empty());
    }

    #[test]
    fn test_demo_references_are_consistent() {
        let snapshot = Snapshot::demo();
        for purchase in &snapshot.purchases {
            assert!(snapshot.users.iter().any(|u| u.id == purchase.user_id));
            assert!(snapshot.items.iter().any(|i| i.id == purchase.item_id));
        }
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"users": []}"#).unwrap();
        assert!(snapshot.items.is_empty());
        assert!(snapshot.cash_transactions.is_empty());
    }
}
