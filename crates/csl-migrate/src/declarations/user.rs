//! `User` schema migrations.

use super::{json_type_name, DeclarationError};
use crate::edge::{Document, MigrationEdge, TransformError};
use serde_json::Value;

pub const SCHEMA: &str = "User";

/// Domain of the placeholder address synthesized for users without an email.
pub const PLACEHOLDER_EMAIL_DOMAIN: &str = "migration-placeholder.syncropel.com";

/// `User` 1.0.0 -> 2.0.0
///
/// - renames `name` to `display_name`
/// - adds a placeholder `email` derived from `id` when none is set
/// - removes the deprecated `age` field
pub fn v1_to_v2() -> MigrationEdge {
    MigrationEdge::new(
        "1.0.0",
        "2.0.0",
        "Renames 'name' to 'display_name', adds 'email', and removes 'age'.",
        user_v1_to_v2,
    )
}

fn user_v1_to_v2(data: Document) -> Result<Document, TransformError> {
    let mut user = match data {
        Value::Object(user) => user,
        other => {
            return Err(Box::new(DeclarationError::NotAnObject {
                schema: SCHEMA,
                version: "1.0.0",
                found: json_type_name(&other),
            }))
        }
    };

    if let Some(name) = user.remove("name") {
        user.insert("display_name".to_string(), name);
    }

    if !user.get("email").is_some_and(is_set) {
        let email = placeholder_email(user.get("id"));
        user.insert("email".to_string(), Value::String(email));
    }

    user.remove("age");

    Ok(Value::Object(user))
}

/// Falsy values (null, false, 0, "") count as "no email".
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A missing or null `id` yields `user-unknown@...`, never `user-undefined@...`.
fn placeholder_email(id: Option<&Value>) -> String {
    let local = match id {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "unknown".to_string(),
        Some(other) => other.to_string(),
    };
    format!("user-{local}@{PLACEHOLDER_EMAIL_DOMAIN}")
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
