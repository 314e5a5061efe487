//! The user record returned by the remote data source.

use serde::{Deserialize, Serialize};

/// A single user as served by the remote API.
///
/// Fields beyond `id`, `name` and `email` (addresses, phone numbers, ...)
/// are ignored during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable identifier assigned by the data source.
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    /// Convenience constructor, mostly for tests and fixtures.
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_remote_shape_ignoring_extra_fields() {
        let json = r#"[
            {
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "email": "Sincere@april.biz",
                "address": { "city": "Gwenborough" },
                "phone": "1-770-736-8031 x56442"
            }
        ]"#;
        let users: Vec<User> = serde_json::from_str(json).unwrap();
        assert_eq!(users, vec![User::new(1, "Leanne Graham", "Sincere@april.biz")]);
    }

    #[test]
    fn rejects_records_missing_required_fields() {
        let json = r#"[{ "id": 1, "name": "No Email" }]"#;
        assert!(serde_json::from_str::<Vec<User>>(json).is_err());
    }

    #[test]
    fn rejects_non_integer_id() {
        let json = r#"[{ "id": "one", "name": "A", "email": "a@x.com" }]"#;
        assert!(serde_json::from_str::<Vec<User>>(json).is_err());
    }

    #[test]
    fn rejects_float_id() {
        let json = r#"[{ "id": 1.0, "name": "A", "email": "a@x.com" }]"#;
        assert!(serde_json::from_str::<Vec<User>>(json).is_err());
    }
}
