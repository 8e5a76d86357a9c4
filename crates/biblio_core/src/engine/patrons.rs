//! User registry operations: register, search, update, remove patrons.
//!
//! # Invariants
//! - Ids are handed out sequentially from 1 and never reused.
//! - `remove_user` refuses while the user has open loans.

use super::{contains_ignore_case, CirculationEngine, EngineError, EngineResult};
use crate::model::user::{User, UserId};

/// Partial update for a user profile; `None` or an empty string keeps the
/// current value.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CirculationEngine {
    /// Registers a user under the next sequential id and returns them.
    ///
    /// Always succeeds.
    pub fn register_user(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> &User {
        let index = self.users.len();
        self.users
            .push(User::new(self.next_user_id, name, email, phone));
        self.next_user_id += 1;
        &self.users[index]
    }

    /// Case-insensitive substring search over name and email, in
    /// registration order.
    pub fn find_users(&self, term: &str) -> Vec<&User> {
        let term = term.to_lowercase();
        self.users
            .iter()
            .filter(|user| {
                contains_ignore_case(&user.name, &term)
                    || contains_ignore_case(&user.email, &term)
            })
            .collect()
    }

    /// Looks a user up by id.
    pub fn find_user_by_id(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Overwrites the patched fields of the user's profile.
    pub fn update_user(&mut self, id: UserId, patch: UserPatch) -> EngineResult<()> {
        let index = self.user_index(id).ok_or(EngineError::UserNotFound(id))?;
        let user = &mut self.users[index];
        if let Some(name) = patch.name.filter(|value| !value.is_empty()) {
            user.name = name;
        }
        if let Some(email) = patch.email.filter(|value| !value.is_empty()) {
            user.email = email;
        }
        if let Some(phone) = patch.phone.filter(|value| !value.is_empty()) {
            user.phone = phone;
        }
        Ok(())
    }

    /// Removes a user, but only once all their loans are returned.
    pub fn remove_user(&mut self, id: UserId) -> EngineResult<()> {
        let index = self.user_index(id).ok_or(EngineError::UserNotFound(id))?;
        if !self.users[index].active_loans.is_empty() {
            return Err(EngineError::UserHasOpenLoans(id));
        }
        self.users.remove(index);
        Ok(())
    }
}
