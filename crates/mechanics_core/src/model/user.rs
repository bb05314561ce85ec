//! User accounts referenced by managers, assignees, authors and uploaders.

use super::{merge, Record, RecordId, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    User,
}

impl UserRole {
    pub const ALL: &'static [&'static str] = &["admin", "manager", "user"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    /// Unique across the collection.
    pub username: String,
    /// Opaque secret. Stored as given and never serialized.
    #[serde(skip_serializing)]
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
}

impl Record for User {
    type New = NewUser;
    type Patch = UserPatch;

    const KIND: &'static str = "user";

    fn id(&self) -> &str {
        &self.id
    }

    fn materialize(id: RecordId, new: NewUser, now: Timestamp) -> Self {
        Self {
            id,
            username: new.username,
            password: new.password,
            email: new.email,
            full_name: new.full_name,
            role: new.role.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: UserPatch, now: Timestamp) {
        merge(&mut self.username, patch.username);
        merge(&mut self.password, patch.password);
        merge(&mut self.email, patch.email);
        merge(&mut self.full_name, patch.full_name);
        merge(&mut self.role, patch.role);
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::{NewUser, User};
    use crate::model::Record;
    use chrono::Utc;

    #[test]
    fn password_is_not_serialized() {
        let new = NewUser {
            username: "alex.chen".to_string(),
            password: "hunter2".to_string(),
            email: "alex@example.com".to_string(),
            full_name: "Alex Chen".to_string(),
            role: None,
        };
        let user = User::materialize("u1".to_string(), new, Utc::now());
        let json = serde_json::to_value(&user).expect("user should serialize");
        assert!(json.get("password").is_none());
        assert_eq!(json["fullName"], "Alex Chen");
        assert_eq!(json["role"], "user");
    }
}
