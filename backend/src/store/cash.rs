//! Manual cash ledger operations
//!
//! The derived transactions emitted by item, purchase and expense mutations
//! go through `record_cash`; these operations are the manual-adjustment
//! surface on the same ledger.

use uuid::Uuid;

use shared::{validate_cash_transaction, CashTransaction, NewCashTransaction};

use super::{Collection, LedgerStore};
use crate::error::{AppError, AppResult};

impl LedgerStore {
    /// Append a manual ledger entry. The amount's sign must match the
    /// declared kind.
    pub fn add_cash_transaction(
        &mut self,
        input: NewCashTransaction,
    ) -> AppResult<CashTransaction> {
        validate_cash_transaction(&input)
            .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        let tx = CashTransaction {
            id: Self::next_id(),
            amount: input.amount,
            description: input.description,
            date: input.date,
            kind: input.kind,
        };
        self.cash_transactions.push(tx.clone());
        self.mark_dirty(Collection::CashTransactions);
        Ok(tx)
    }

    /// Remove a ledger entry outright. Unlike purchase and expense deletion,
    /// no reversal row is inserted.
    pub fn delete_cash_transaction(&mut self, id: Uuid) -> AppResult<()> {
        let idx = self
            .cash_transactions
            .iter()
            .position(|tx| tx.id == id)
            .ok_or_else(|| AppError::NotFound("Cash transaction".to_string()))?;

        self.cash_transactions.remove(idx);
        self.mark_dirty(Collection::CashTransactions);
        Ok(())
    }
}
