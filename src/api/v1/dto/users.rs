/*
 * Responsibility
 * - User response DTO + list query params
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::user_repo::UserRow;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        // password_hash deliberately never leaves the repo layer
        Self {
            user_id: row.user_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            role: row.role,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<i64>,
    pub items_per_page: Option<i64>,
}

impl ListUsersQuery {
    /// `(limit, offset)` with page >= 1 and items_per_page >= 1 enforced;
    /// defaults are page 1, 10 items.
    pub fn limit_offset(&self) -> (i64, i64) {
        let items = match self.items_per_page {
            Some(n) if n >= 1 => n,
            _ => 10,
        };
        let page = match self.page {
            Some(n) if n >= 1 => n,
            _ => 1,
        };
        (items, (page - 1) * items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_and_floors() {
        let q = ListUsersQuery {
            page: None,
            items_per_page: None,
        };
        assert_eq!(q.limit_offset(), (10, 0));

        let q = ListUsersQuery {
            page: Some(3),
            items_per_page: Some(25),
        };
        assert_eq!(q.limit_offset(), (25, 50));

        let q = ListUsersQuery {
            page: Some(0),
            items_per_page: Some(-5),
        };
        assert_eq!(q.limit_offset(), (10, 0));
    }
}
