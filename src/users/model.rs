//! User record types.

use serde::{Deserialize, Serialize};

/// Store-assigned user identifier.
pub type UserId = u64;

/// A stored user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// Payload accepted by create and update.
///
/// Clients that echo whole records back send an `id` too. It is not a field
/// here, so serde skips it whatever its JSON type. A missing or `null` name
/// deserializes to `None` and is reported as a validation error rather than
/// a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInput {
    pub name: Option<String>,
}

impl UserInput {
    /// Create a payload with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Returns true if the payload carries a non-empty name.
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Take the name out of the payload, empty if absent.
    pub fn into_name(self) -> String {
        self.name.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_null_name_has_no_name() {
        for body in ["{}", r#"{"name": null}"#, r#"{"name": ""}"#] {
            let input: UserInput = serde_json::from_str(body).unwrap();
            assert!(!input.has_name(), "{body}");
        }
    }

    #[test]
    fn test_any_id_is_skipped() {
        for body in [
            r#"{"id": 7, "name": "Alice"}"#,
            r#"{"id": -5, "name": "Alice"}"#,
            r#"{"id": 1e30, "name": "Alice"}"#,
            r#"{"id": "abc", "name": "Alice"}"#,
        ] {
            let input: UserInput = serde_json::from_str(body).unwrap();
            assert_eq!(input, UserInput::named("Alice"), "{body}");
        }
    }

    #[test]
    fn test_whitespace_name_is_accepted() {
        assert!(UserInput::named(" ").has_name());
    }

    #[test]
    fn test_user_wire_format() {
        let user = User { id: 1, name: "Alice".into() };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "Alice"}));
    }
}
