//! Demo records.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tabula::record::Record;
use tabula::value::Value;

use crate::error::DemoError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl User {
    /// Build the user the "Add" action appends after `existing` users.
    /// Empty names are rejected.
    pub fn from_name(existing: usize, name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }
        Some(Self {
            id: existing as u32 + 1,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        })
    }
}

impl Record for User {
    fn field(&self, name: &str) -> Value {
        match name {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            _ => Value::Undefined,
        }
    }
}

/// Users shown when no data file is given.
pub fn initial_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "web".into(),
            email: "web@example.com".into(),
        },
        User {
            id: 2,
            name: "hello".into(),
            email: "hello@example.com".into(),
        },
    ]
}

/// Read a JSON array of users.
pub fn load_users(path: &Path) -> Result<Vec<User>, DemoError> {
    let raw = fs::read_to_string(path).map_err(|source| DemoError::ReadData {
        path: path.to_path_buf(),
        source,
    })?;
    let users: Vec<User> = serde_json::from_str(&raw).map_err(|source| DemoError::Data {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded {} users from {}", users.len(), path.display());
    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_derives_id_and_email() {
        let user = User::from_name(2, "Alice").unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.name, "Alice");
    }

    #[test]
    fn from_name_rejects_empty() {
        assert_eq!(User::from_name(0, ""), None);
    }

    #[test]
    fn record_fields() {
        let user = &initial_users()[0];
        assert_eq!(user.field("id"), Value::Number(1.0));
        assert_eq!(user.field("email").to_string(), "web@example.com");
        assert!(user.field("age").is_undefined());
    }

    #[test]
    fn load_reports_bad_json_with_path() {
        let path = std::env::temp_dir().join(format!("tabula-demo-users-{}.json", std::process::id()));
        fs::write(&path, r#"[{"id": 1, "name": "web"}]"#).unwrap();

        let err = load_users(&path).unwrap_err();
        assert!(matches!(err, DemoError::Data { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_missing_file() {
        let err = load_users(Path::new("/nonexistent/tabula/users.json")).unwrap_err();
        assert!(matches!(err, DemoError::ReadData { .. }));
    }
}
