//! Catalog item operations
//!
//! Stock movements are treated as cash events: buying stock costs money and
//! shrinking or refunding stock returns it, so every change to an item's
//! on-hand amount emits exactly one cash transaction priced at the item's
//! purchase cost.

use uuid::Uuid;

use shared::{validate_item, Item, NewItem};

use super::{Collection, LedgerStore};
use crate::error::{AppError, AppResult};

impl LedgerStore {
    /// Append an item with a generated id. Initial stock is treated as a
    /// purchase cost: a non-zero starting amount emits a withdrawal for
    /// `amount * purchase_price`.
    pub fn add_item(&mut self, input: NewItem) -> AppResult<Item> {
        validate_item(&input).map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        let item = Item {
            id: Self::next_id(),
            name: input.name,
            purchase_price: input.purchase_price,
            price: input.price,
            category: input.category,
            amount: input.amount,
        };

        if item.amount > 0 {
            let cost = item.amount as f64 * item.purchase_price;
            self.record_cash(
                -cost,
                format!("Stock purchase: {} ({} units)", item.name, item.amount),
                Self::today(),
            );
        }

        self.items.push(item.clone());
        self.mark_dirty(Collection::Items);
        Ok(item)
    }

    /// Replace an item's fields. A changed stock amount emits a cash
    /// transaction for the signed difference, priced at the incoming
    /// purchase cost.
    pub fn update_item(&mut self, id: Uuid, input: NewItem) -> AppResult<Item> {
        validate_item(&input).map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        let idx = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| AppError::NotFound("Item".to_string()))?;

        let delta = input.amount - self.items[idx].amount;
        if delta != 0 {
            self.record_stock_delta(&input.name, delta, input.purchase_price);
        }

        let item = Item {
            id,
            name: input.name,
            purchase_price: input.purchase_price,
            price: input.price,
            category: input.category,
            amount: input.amount,
        };
        self.items[idx] = item.clone();
        self.mark_dirty(Collection::Items);
        Ok(item)
    }

    /// Set an item's on-hand amount, emitting the same delta-based cash
    /// transaction as [`update_item`](Self::update_item) but leaving every
    /// other field alone.
    pub fn update_item_inventory(&mut self, id: Uuid, new_amount: i64) -> AppResult<Item> {
        if new_amount < 0 {
            return Err(AppError::Validation {
                field: "amount".to_string(),
                message: "Stock amount cannot be negative".to_string(),
                message_ar: "كمية المخزون لا يمكن أن تكون سالبة".to_string(),
            });
        }

        let idx = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| AppError::NotFound("Item".to_string()))?;

        let delta = new_amount - self.items[idx].amount;
        if delta != 0 {
            let name = self.items[idx].name.clone();
            let purchase_price = self.items[idx].purchase_price;
            self.record_stock_delta(&name, delta, purchase_price);
            self.items[idx].amount = new_amount;
            self.mark_dirty(Collection::Items);
        }

        Ok(self.items[idx].clone())
    }

    /// Remove an item, blocked while any purchase references it. Remaining
    /// stock value is refunded to the ledger as a deposit.
    pub fn delete_item(&mut self, id: Uuid) -> AppResult<()> {
        let idx = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| AppError::NotFound("Item".to_string()))?;

        if self.purchases.iter().any(|p| p.item_id == id) {
            return Err(AppError::ReferentialIntegrity {
                resource: "Item".to_string(),
                message: "Cannot delete an item with purchases on record; delete the purchases first"
                    .to_string(),
                message_ar: "لا يمكن حذف منتج له مشتريات. يرجى حذف المشتريات أولاً.".to_string(),
            });
        }

        let item = self.items.remove(idx);
        if item.amount > 0 {
            let value = item.amount as f64 * item.purchase_price;
            self.record_cash(
                value,
                format!("Stock refund: {} ({} units)", item.name, item.amount),
                Self::today(),
            );
        }
        self.mark_dirty(Collection::Items);
        Ok(())
    }

    /// Emit the cash transaction for a stock delta: an increase is a
    /// withdrawal (cost), a decrease a deposit (refund).
    fn record_stock_delta(&mut self, name: &str, delta: i64, purchase_price: f64) {
        let cost = delta as f64 * purchase_price;
        let sign = if delta > 0 { "+" } else { "" };
        self.record_cash(
            -cost,
            format!("Stock adjustment: {} ({}{} units)", name, sign, delta),
            Self::today(),
        );
    }
}
