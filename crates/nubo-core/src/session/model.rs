//! SessionRecord domain model.
//!
//! The durable representation of "who is logged in". Serialized as a JSON
//! object with camelCase keys under a single storage key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Value stored in [`SessionRecord::ip`] when the public IP lookup failed.
pub const IP_UNAVAILABLE: &str = "unavailable";

/// Sentinel found in payloads written by older clients.
const LEGACY_IP_UNAVAILABLE: &str = "No disponible";

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
}

/// The authenticated-user record.
///
/// `last_login` is the `current_login` of the record this one replaced, so it
/// always trails the current login by exactly one. It is `None` on the first
/// login seen by this storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    pub email: String,
    /// Older payloads stored this under `name`.
    #[serde(alias = "name", default)]
    pub display_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_ip", deserialize_with = "deserialize_ip")]
    pub ip: String,
    pub current_login: DateTime<Utc>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

fn default_ip() -> String {
    IP_UNAVAILABLE.to_string()
}

fn deserialize_ip<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let ip = String::deserialize(deserializer)?;
    if ip == LEGACY_IP_UNAVAILABLE {
        Ok(IP_UNAVAILABLE.to_string())
    } else {
        Ok(ip)
    }
}

impl SessionRecord {
    /// True when no earlier login was recorded before this one.
    pub fn is_first_session(&self) -> bool {
        self.last_login.is_none()
    }

    /// True when the IP enrichment did not produce an address.
    pub fn ip_unavailable(&self) -> bool {
        self.ip == IP_UNAVAILABLE
    }

    /// Applies the fields present in `update`, leaving the rest untouched.
    pub fn merge(&mut self, update: SessionUpdate) {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(display_name) = update.display_name {
            self.display_name = display_name;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(ip) = update.ip {
            self.ip = ip;
        }
    }
}

/// Partial update applied by `SessionStore::update_session`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

impl SessionUpdate {
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SessionRecord {
        SessionRecord {
            id: "1".to_string(),
            email: "usertest@gmail.com".to_string(),
            display_name: "Usuario Test".to_string(),
            role: Role::User,
            ip: "203.0.113.7".to_string(),
            current_login: "2025-03-04T10:00:00Z".parse().unwrap(),
            last_login: None,
        }
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["displayName"], "Usuario Test");
        assert_eq!(json["role"], "user");
        assert!(json.get("currentLogin").is_some());
        assert!(json["lastLogin"].is_null());
    }

    #[test]
    fn test_reads_legacy_payload() {
        let payload = r#"{
            "id": "1",
            "email": "usertest@gmail.com",
            "name": "Usuario Test",
            "role": "user",
            "ip": "No disponible",
            "currentLogin": "2025-03-04T10:00:00.000Z",
            "lastLogin": null
        }"#;
        let record: SessionRecord = serde_json::from_str(payload).unwrap();
        assert_eq!(record.display_name, "Usuario Test");
        assert!(record.is_first_session());
        assert!(record.ip_unavailable());
        assert_eq!(record.ip, IP_UNAVAILABLE);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let payload = r#"{"id":"1","email":"a@b.c","currentLogin":"2025-03-04T10:00:00Z"}"#;
        let record: SessionRecord = serde_json::from_str(payload).unwrap();
        assert_eq!(record.role, Role::User);
        assert!(record.ip_unavailable());
        assert_eq!(record.last_login, None);
        assert!(record.display_name.is_empty());
    }

    #[test]
    fn test_missing_current_login_is_rejected() {
        let payload = r#"{"id":"1","email":"a@b.c"}"#;
        assert!(serde_json::from_str::<SessionRecord>(payload).is_err());
    }

    #[test]
    fn test_merge_only_touches_present_fields() {
        let mut record = sample();
        let before = record.clone();
        record.merge(SessionUpdate::default().display_name("Operaciones"));

        assert_eq!(record.display_name, "Operaciones");
        assert_eq!(record.email, before.email);
        assert_eq!(record.ip, before.ip);
        assert_eq!(record.current_login, before.current_login);
    }
}
