//! Purchase (sale) operations
//!
//! A purchase snapshots the item's sale price into its total, decrements the
//! item's stock and deposits the proceeds into the cash ledger. Deleting a
//! purchase restores the stock and appends a reversal withdrawal instead of
//! erasing the original deposit.

use uuid::Uuid;

use shared::{NewPurchase, Purchase};

use super::{Collection, LedgerStore};
use crate::error::{AppError, AppResult};

impl LedgerStore {
    /// Record a sale: validates stock, decrements the item's amount, appends
    /// the purchase and deposits `price * quantity` into the ledger.
    pub fn add_purchase(&mut self, input: NewPurchase) -> AppResult<Purchase> {
        if input.quantity <= 0 {
            return Err(AppError::Validation {
                field: "quantity".to_string(),
                message: "Quantity must be positive".to_string(),
                message_ar: "الكمية يجب أن تكون أكبر من صفر".to_string(),
            });
        }

        if self.user(input.user_id).is_none() {
            return Err(AppError::NotFound("User".to_string()));
        }

        let item_idx = self
            .items
            .iter()
            .position(|i| i.id == input.item_id)
            .ok_or_else(|| AppError::NotFound("Item".to_string()))?;

        let available = self.items[item_idx].amount;
        if available < input.quantity {
            return Err(AppError::InsufficientStock {
                requested: input.quantity,
                available,
            });
        }

        let item_name = self.items[item_idx].name.clone();
        let total = self.items[item_idx].price * input.quantity as f64;

        self.items[item_idx].amount -= input.quantity;
        self.mark_dirty(Collection::Items);

        let purchase = Purchase {
            id: Self::next_id(),
            user_id: input.user_id,
            item_id: input.item_id,
            quantity: input.quantity,
            date: input.date,
            total,
        };
        self.purchases.push(purchase.clone());
        self.mark_dirty(Collection::Purchases);

        self.record_cash(
            total,
            format!("Sale: {} ({} units)", item_name, purchase.quantity),
            purchase.date,
        );

        Ok(purchase)
    }

    /// Reverse a sale: restores the item's stock, removes the purchase and
    /// withdraws the original total from the ledger.
    pub fn delete_purchase(&mut self, id: Uuid) -> AppResult<()> {
        let idx = self
            .purchases
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound("Purchase".to_string()))?;

        // The item must still exist while the purchase references it.
        let item_idx = self
            .items
            .iter()
            .position(|i| i.id == self.purchases[idx].item_id)
            .ok_or_else(|| AppError::NotFound("Item".to_string()))?;

        let purchase = self.purchases.remove(idx);
        self.mark_dirty(Collection::Purchases);

        self.items[item_idx].amount += purchase.quantity;
        self.mark_dirty(Collection::Items);

        let item_name = self.items[item_idx].name.clone();
        self.record_cash(
            -purchase.total,
            format!("Sale reversal: {} ({} units)", item_name, purchase.quantity),
            Self::today(),
        );

        Ok(())
    }
}
