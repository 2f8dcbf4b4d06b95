//! The record trait the table reads rows through.

use std::collections::{BTreeMap, HashMap};

use crate::value::Value;

/// A row of caller data that exposes named scalar fields.
///
/// Implement this for your own structs; unknown field names should return
/// [`Value::Undefined`] rather than failing.
///
/// ```
/// use tabula::record::Record;
/// use tabula::value::Value;
///
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// impl Record for User {
///     fn field(&self, name: &str) -> Value {
///         match name {
///             "id" => self.id.into(),
///             "name" => self.name.as_str().into(),
///             _ => Value::Undefined,
///         }
///     }
/// }
///
/// let user = User { id: 7, name: "web".into() };
/// assert_eq!(user.field("id").to_string(), "7");
/// assert!(user.field("email").is_undefined());
/// ```
pub trait Record {
    fn field(&self, name: &str) -> Value;
}

impl Record for HashMap<String, Value> {
    fn field(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or_default()
    }
}

impl Record for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or_default()
    }
}
