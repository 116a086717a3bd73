//! Expense operations
//!
//! Every expense withdraws its amount from the cash ledger; deleting an
//! expense appends a refunding deposit rather than erasing the original
//! withdrawal.

use uuid::Uuid;

use shared::{validate_expense, Expense, NewExpense};

use super::{Collection, LedgerStore};
use crate::error::{AppError, AppResult};

impl LedgerStore {
    /// Append an expense with a generated id and withdraw its amount.
    pub fn add_expense(&mut self, input: NewExpense) -> AppResult<Expense> {
        validate_expense(&input).map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        let expense = Expense {
            id: Self::next_id(),
            name: input.name,
            amount: input.amount,
            date: input.date,
            category: input.category,
        };

        self.record_cash(
            -expense.amount,
            format!("Expense: {}", expense.name),
            expense.date,
        );

        self.expenses.push(expense.clone());
        self.mark_dirty(Collection::Expenses);
        Ok(expense)
    }

    /// Remove an expense and deposit its amount back (a reversal entry, not
    /// a deletion of the original withdrawal).
    pub fn delete_expense(&mut self, id: Uuid) -> AppResult<()> {
        let idx = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound("Expense".to_string()))?;

        let expense = self.expenses.remove(idx);
        self.mark_dirty(Collection::Expenses);

        self.record_cash(
            expense.amount,
            format!("Expense reversal: {}", expense.name),
            Self::today(),
        );

        Ok(())
    }
}
