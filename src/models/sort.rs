//! Sort key resolution and ordering of user records.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::user::User;

/// Field used to order the user listing.
///
/// Resolution from text is total: `"name"` and `"email"` select their
/// field, anything else (including an absent value) falls back to `Id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Numeric ascending by `id`.
    #[default]
    Id,
    /// Lexicographic ascending by `name`.
    Name,
    /// Lexicographic ascending by `email`.
    Email,
}

impl SortKey {
    /// Every sortable field, in column order.
    pub const ALL: [SortKey; 3] = [SortKey::Id, SortKey::Name, SortKey::Email];

    /// Resolve an optional query value to a key. Never fails.
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.map(Self::from).unwrap_or_default()
    }

    /// Value used in the `sortOrder` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Email => "email",
        }
    }

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Id => "Id",
            SortKey::Name => "Name",
            SortKey::Email => "Email",
        }
    }
}

impl From<&str> for SortKey {
    /// Matching is exact: `"Name"` is not `"name"` and resolves to `Id`.
    fn from(raw: &str) -> Self {
        match raw {
            "email" => SortKey::Email,
            "name" => SortKey::Name,
            _ => SortKey::Id,
        }
    }
}

/// Accepts any string; unrecognised values become `Id` instead of
/// failing the whole query extraction.
impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SortKey::from(s.as_str()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order users ascending by `key`.
///
/// The sort is stable, so records with equal keys keep the order in
/// which the data source returned them.
pub fn sort_users(mut users: Vec<User>, key: SortKey) -> Vec<User> {
    match key {
        SortKey::Id => users.sort_by_key(|u| u.id),
        SortKey::Name => users.sort_by(|a, b| text_order(&a.name, &b.name)),
        SortKey::Email => users.sort_by(|a, b| text_order(&a.email, &b.email)),
    }
    users
}

/// Compare by UTF-16 code units, the order browsers use for strings.
/// Differs from `str::cmp` only when astral characters meet BMP
/// characters at or above U+E000.
fn text_order(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob_and_amy() -> Vec<User> {
        vec![
            User::new(2, "Bob", "b@x.com"),
            User::new(1, "Amy", "a@x.com"),
        ]
    }

    fn ids(users: &[User]) -> Vec<i64> {
        users.iter().map(|u| u.id).collect()
    }

    #[test]
    fn resolve_recognised_keys() {
        assert_eq!(SortKey::resolve(Some("id")), SortKey::Id);
        assert_eq!(SortKey::resolve(Some("name")), SortKey::Name);
        assert_eq!(SortKey::resolve(Some("email")), SortKey::Email);
    }

    #[test]
    fn resolve_falls_back_to_id() {
        assert_eq!(SortKey::resolve(None), SortKey::Id);
        assert_eq!(SortKey::resolve(Some("")), SortKey::Id);
        assert_eq!(SortKey::resolve(Some("phone")), SortKey::Id);
        assert_eq!(SortKey::resolve(Some("Name")), SortKey::Id);
        assert_eq!(SortKey::resolve(Some(" email")), SortKey::Id);
    }

    #[test]
    fn deserialize_never_fails_on_strings() {
        let key: SortKey = serde_json::from_str(r#""email""#).unwrap();
        assert_eq!(key, SortKey::Email);
        let key: SortKey = serde_json::from_str(r#""bogus""#).unwrap();
        assert_eq!(key, SortKey::Id);
    }

    #[test]
    fn display_matches_query_value() {
        for key in SortKey::ALL {
            assert_eq!(key.to_string(), key.as_str());
            assert_eq!(SortKey::from(key.as_str()), key);
        }
    }

    #[test]
    fn sort_by_name() {
        let sorted = sort_users(bob_and_amy(), SortKey::Name);
        let names: Vec<_> = sorted.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Amy", "Bob"]);
    }

    #[test]
    fn sort_by_id() {
        let sorted = sort_users(bob_and_amy(), SortKey::Id);
        assert_eq!(ids(&sorted), vec![1, 2]);
    }

    #[test]
    fn sort_by_email() {
        let users = vec![
            User::new(1, "Zed", "z@x.com"),
            User::new(2, "Amy", "m@x.com"),
            User::new(3, "Bob", "a@x.com"),
        ];
        assert_eq!(ids(&sort_users(users, SortKey::Email)), vec![3, 2, 1]);
    }

    #[test]
    fn id_sort_is_numeric_not_textual() {
        let users = vec![
            User::new(10, "A", "a@x.com"),
            User::new(9, "B", "b@x.com"),
            User::new(100, "C", "c@x.com"),
        ];
        assert_eq!(ids(&sort_users(users, SortKey::Id)), vec![9, 10, 100]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let users = vec![
            User::new(3, "Sam", "s1@x.com"),
            User::new(1, "Amy", "a@x.com"),
            User::new(2, "Sam", "s2@x.com"),
            User::new(4, "Sam", "s0@x.com"),
        ];
        let sorted = sort_users(users, SortKey::Name);
        assert_eq!(ids(&sorted), vec![1, 3, 2, 4]);
    }

    #[test]
    fn sort_keeps_every_record() {
        let users: Vec<User> = (0..50)
            .map(|i| User::new((i * 37) % 50, format!("n{}", i % 7), format!("e{}", i % 5)))
            .collect();
        for key in SortKey::ALL {
            let sorted = sort_users(users.clone(), key);
            assert_eq!(sorted.len(), users.len());
            let mut expected = ids(&users);
            let mut actual = ids(&sorted);
            expected.sort();
            actual.sort();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn sorted_output_is_non_decreasing() {
        let users = vec![
            User::new(5, "eve", "E@x.com"),
            User::new(2, "Eve", "e@x.com"),
            User::new(7, "adam", "b@x.com"),
            User::new(1, "Zoe", "a@x.com"),
        ];
        let by_id = sort_users(users.clone(), SortKey::Id);
        assert!(by_id.windows(2).all(|w| w[0].id <= w[1].id));
        let by_name = sort_users(users.clone(), SortKey::Name);
        assert!(by_name.windows(2).all(|w| w[0].name <= w[1].name));
        let by_email = sort_users(users, SortKey::Email);
        assert!(by_email.windows(2).all(|w| w[0].email <= w[1].email));
    }

    #[test]
    fn text_sort_uses_utf16_order() {
        let users = vec![
            User::new(1, "\u{FF5E}", "\u{FF5E}@x.com"),
            User::new(2, "\u{1F600}", "\u{1F600}@x.com"),
            User::new(3, "abc", "abc@x.com"),
        ];
        assert_eq!(ids(&sort_users(users.clone(), SortKey::Name)), vec![3, 2, 1]);
        assert_eq!(ids(&sort_users(users, SortKey::Email)), vec![3, 2, 1]);
    }

    #[test]
    fn sort_empty_list() {
        assert!(sort_users(Vec::new(), SortKey::Name).is_empty());
    }
}
