//! Sorted user listing handed to the output renderers.

use serde::Serialize;

use super::sort::{SortKey, sort_users};
use super::user::User;

/// Users ordered by a resolved sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserTable {
    pub sort_order: SortKey,
    pub users: Vec<User>,
}

impl UserTable {
    /// Sort `users` by `sort_order` and wrap the result.
    pub fn new(users: Vec<User>, sort_order: SortKey) -> Self {
        Self {
            sort_order,
            users: sort_users(users, sort_order),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
