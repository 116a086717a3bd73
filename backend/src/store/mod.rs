//! The Ledger-Consistency Store
//!
//! Owns the five collections (users, items, purchases, expenses, cash
//! transactions) and exposes the mutation operations that keep them
//! consistent: every stock or sales event is mirrored by exactly one cash
//! transaction, and the derived totals (cash balance, inventory value, total
//! assets) are recomputed from the source collections on every call, never
//! stored.
//!
//! Each operation validates its input before mutating anything, so a failed
//! call leaves the store untouched. Mutations record which collections they
//! touched in a deduplicated pending-write queue; the application drains it
//! to the persistence backend.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use shared::{CashTransaction, Expense, Item, Purchase, Snapshot, TransactionKind, User};

use crate::error::{AppError, AppResult};

mod cash;
mod expenses;
mod items;
mod purchases;
mod users;

/// One of the five persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Items,
    Purchases,
    Expenses,
    CashTransactions,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::Items,
        Collection::Purchases,
        Collection::Expenses,
        Collection::CashTransactions,
    ];

    /// Storage key for the collection, matching the snapshot field names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Items => "items",
            Collection::Purchases => "purchases",
            Collection::Expenses => "expenses",
            Collection::CashTransactions => "cashTransactions",
        }
    }
}

/// In-memory store for all cafeteria data.
///
/// Single logical writer: every operation runs to completion before the next
/// starts, so no internal locking is needed here.
#[derive(Debug)]
pub struct LedgerStore {
    users: Vec<User>,
    items: Vec<Item>,
    purchases: Vec<Purchase>,
    expenses: Vec<Expense>,
    cash_transactions: Vec<CashTransaction>,
    /// Collections touched since the last drain, in first-touch order.
    dirty: Vec<Collection>,
}

impl LedgerStore {
    /// Build a store from a loaded snapshot. The snapshot becomes the
    /// authoritative state; nothing is marked dirty.
    pub fn init(snapshot: Snapshot) -> Self {
        Self {
            users: snapshot.users,
            items: snapshot.items,
            purchases: snapshot.purchases,
            expenses: snapshot.expenses,
            cash_transactions: snapshot.cash_transactions,
            dirty: Vec::new(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn cash_transactions(&self) -> &[CashTransaction] {
        &self.cash_transactions
    }

    pub fn item(&self, id: Uuid) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn purchase(&self, id: Uuid) -> Option<&Purchase> {
        self.purchases.iter().find(|p| p.id == id)
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Clone the full state for persistence or inspection.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            users: self.users.clone(),
            items: self.items.clone(),
            purchases: self.purchases.clone(),
            expenses: self.expenses.clone(),
            cash_transactions: self.cash_transactions.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Derived totals: always recomputed, never cached
    // ------------------------------------------------------------------

    /// Sum of all signed cash transaction amounts.
    pub fn cash_balance(&self) -> f64 {
        self.cash_transactions.iter().map(|tx| tx.amount).sum()
    }

    /// Sum of on-hand quantity times purchase cost across items.
    pub fn inventory_value(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.purchase_price * item.amount as f64)
            .sum()
    }

    /// Cash balance plus inventory value.
    pub fn total_assets(&self) -> f64 {
        self.cash_balance() + self.inventory_value()
    }

    // ------------------------------------------------------------------
    // Pending-write queue
    // ------------------------------------------------------------------

    fn mark_dirty(&mut self, collection: Collection) {
        if !self.dirty.contains(&collection) {
            self.dirty.push(collection);
        }
    }

    /// Mark every collection for persistence (used after seeding).
    pub fn mark_all_dirty(&mut self) {
        for collection in Collection::ALL {
            self.mark_dirty(collection);
        }
    }

    /// Drain the queue of collections awaiting persistence.
    pub fn take_dirty(&mut self) -> Vec<Collection> {
        std::mem::take(&mut self.dirty)
    }

    /// Put a drained collection back on the queue after a failed write, so
    /// the next drain retries it.
    pub fn requeue(&mut self, collection: Collection) {
        self.mark_dirty(collection);
    }

    pub fn pending_writes(&self) -> &[Collection] {
        &self.dirty
    }

    /// Serialize one collection for the persistence backend.
    pub fn export_collection(&self, collection: Collection) -> AppResult<serde_json::Value> {
        let value = match collection {
            Collection::Users => serde_json::to_value(&self.users),
            Collection::Items => serde_json::to_value(&self.items),
            Collection::Purchases => serde_json::to_value(&self.purchases),
            Collection::Expenses => serde_json::to_value(&self.expenses),
            Collection::CashTransactions => serde_json::to_value(&self.cash_transactions),
        };
        value.map_err(|e| AppError::Internal(format!("Snapshot serialization error: {}", e)))
    }

    // ------------------------------------------------------------------
    // Internal helpers for derived ledger entries
    // ------------------------------------------------------------------

    fn next_id() -> Uuid {
        Uuid::new_v4()
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Append a derived cash transaction. The kind follows the sign of the
    /// amount; callers never pass a zero delta.
    fn record_cash(&mut self, amount: f64, description: String, date: NaiveDate) {
        let kind = if amount < 0.0 {
            TransactionKind::Withdrawal
        } else {
            TransactionKind::Deposit
        };
        self.cash_transactions.push(CashTransaction {
            id: Self::next_id(),
            amount,
            description,
            date,
            kind,
        });
        self.mark_dirty(Collection::CashTransactions);
    }
}
