//! User operations
//!
//! Users never touch the cash ledger; the only cross-collection rule is that
//! a user with purchases on record cannot be deleted.

use uuid::Uuid;

use shared::{validate_user, NewUser, User};

use super::{Collection, LedgerStore};
use crate::error::{AppError, AppResult};

impl LedgerStore {
    /// Append a user with a generated id.
    pub fn add_user(&mut self, input: NewUser) -> AppResult<User> {
        validate_user(&input).map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        let user = User {
            id: Self::next_id(),
            name: input.name,
            department: input.department,
        };
        self.users.push(user.clone());
        self.mark_dirty(Collection::Users);
        Ok(user)
    }

    /// Replace a user's mutable fields; the id is immutable.
    pub fn update_user(&mut self, id: Uuid, input: NewUser) -> AppResult<User> {
        validate_user(&input).map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::NotFound("User".to_string()))?;
        user.name = input.name;
        user.department = input.department;
        let user = user.clone();
        self.mark_dirty(Collection::Users);
        Ok(user)
    }

    /// Remove a user, blocked while any purchase references them.
    pub fn delete_user(&mut self, id: Uuid) -> AppResult<()> {
        let idx = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        if self.purchases.iter().any(|p| p.user_id == id) {
            return Err(AppError::ReferentialIntegrity {
                resource: "User".to_string(),
                message: "Cannot delete a user with purchases on record; delete their purchases first"
                    .to_string(),
                message_ar: "لا يمكن حذف مستخدم لديه مشتريات. يرجى حذف مشترياته أولاً."
                    .to_string(),
            });
        }

        self.users.remove(idx);
        self.mark_dirty(Collection::Users);
        Ok(())
    }
}
