//! Schema validation for draft records at the store boundary
//!
//! Every mutation validates its input with these functions before touching
//! any collection, so a rejected record never partially applies.

use crate::models::{NewCashTransaction, NewExpense, NewItem, NewUser, TransactionKind};

/// A monetary field must be a finite number.
pub fn is_valid_money(value: f64) -> bool {
    value.is_finite()
}

/// Validate a draft user record
pub fn validate_user(user: &NewUser) -> Result<(), &'static str> {
    if user.name.trim().is_empty() {
        return Err("Name is required");
    }
    if user.department.trim().is_empty() {
        return Err("Department is required");
    }
    Ok(())
}

/// Validate a draft catalog item
pub fn validate_item(item: &NewItem) -> Result<(), &'static str> {
    if item.name.trim().is_empty() {
        return Err("Name is required");
    }
    if !is_valid_money(item.purchase_price) || item.purchase_price < 0.0 {
        return Err("Purchase price must be a non-negative amount");
    }
    if !is_valid_money(item.price) || item.price < 0.0 {
        return Err("Price must be a non-negative amount");
    }
    if item.amount < 0 {
        return Err("Stock amount cannot be negative");
    }
    Ok(())
}

/// Validate a draft expense
pub fn validate_expense(expense: &NewExpense) -> Result<(), &'static str> {
    if expense.name.trim().is_empty() {
        return Err("Name is required");
    }
    if !is_valid_money(expense.amount) || expense.amount <= 0.0 {
        return Err("Expense amount must be positive");
    }
    Ok(())
}

/// Validate a manual cash transaction: the sign of the amount must match the
/// declared kind (deposits non-negative, withdrawals negative).
pub fn validate_cash_transaction(tx: &NewCashTransaction) -> Result<(), &'static str> {
    if !is_valid_money(tx.amount) {
        return Err("Amount must be a finite number");
    }
    match tx.kind {
        TransactionKind::Deposit if tx.amount < 0.0 => {
            Err("Deposit amount cannot be negative")
        }
        TransactionKind::Withdrawal if tx.amount >= 0.0 => {
            Err("Withdrawal amount must be negative")
        }
        _ => Ok(()),
    }
}
