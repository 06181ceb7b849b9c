// SPDX-License-Identifier: MPL-2.0
//! Wire types for the account API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Response envelope used by every JSON endpoint: `{ "data": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Error body returned by the server on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// The server-confirmed account record. The client keeps one cached copy in
/// the session store and overwrites it atomically from responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Date of birth in ISO `YYYY-MM-DD` form.
    #[serde(default)]
    pub dob: Option<String>,
    /// URL of the current avatar image, if one was uploaded.
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, rename = "isEmailVerified")]
    pub is_email_verified: bool,
    /// Third-party login identifier. When set, the account has no local
    /// password and the password-change flow is unavailable.
    #[serde(default, rename = "googleId")]
    pub google_id: Option<String>,
}

impl User {
    /// Display name for the greeting line: first name when set, else username.
    pub fn display_name(&self) -> &str {
        self.firstname
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }

    /// Whether the avatar field holds a usable URL.
    pub fn has_avatar(&self) -> bool {
        self.avatar
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }

    /// Whether the account signs in through a third-party provider.
    pub fn uses_third_party_login(&self) -> bool {
        self.google_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }

    /// Date of birth parsed for display, if present and well-formed.
    pub fn dob_date(&self) -> Option<NaiveDate> {
        self.dob
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    }
}

/// Payload for the edit-profile endpoint. All four fields are always sent,
/// mirroring the full form draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub firstname: String,
    pub lastname: String,
    pub bio: String,
    pub dob: String,
}

/// Payload for the change-password endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordChange {
    #[serde(rename = "oldPassword")]
    pub old_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user_json() -> serde_json::Value {
        serde_json::json!({
            "username": "marguerite",
            "email": "marguerite@example.org",
            "firstname": "Marguerite",
            "lastname": "Duras",
            "bio": "Writer.",
            "dob": "1914-04-04",
            "avatar": "https://cdn.example.org/avatars/m.jpeg",
            "isEmailVerified": true,
            "googleId": null
        })
    }

    #[test]
    fn user_deserializes_from_envelope() {
        let body = serde_json::json!({ "data": sample_user_json() });
        let envelope: Envelope<User> = serde_json::from_value(body).expect("valid envelope");

        assert_eq!(envelope.data.username, "marguerite");
        assert!(envelope.data.is_email_verified);
        assert!(!envelope.data.uses_third_party_login());
    }

    #[test]
    fn missing_optional_fields_default_to_none() {
        let body = serde_json::json!({
            "username": "anon",
            "email": "anon@example.org"
        });
        let user: User = serde_json::from_value(body).expect("minimal user");

        assert!(user.firstname.is_none());
        assert!(user.avatar.is_none());
        assert!(!user.is_email_verified);
        assert!(!user.has_avatar());
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let mut user: User = serde_json::from_value(sample_user_json()).unwrap();
        assert_eq!(user.display_name(), "Marguerite");

        user.firstname = Some(String::new());
        assert_eq!(user.display_name(), "marguerite");

        user.firstname = None;
        assert_eq!(user.display_name(), "marguerite");
    }

    #[test]
    fn blank_avatar_url_counts_as_no_avatar() {
        let mut user: User = serde_json::from_value(sample_user_json()).unwrap();
        user.avatar = Some("   ".to_string());
        assert!(!user.has_avatar());
    }

    #[test]
    fn third_party_login_detected_from_google_id() {
        let mut user: User = serde_json::from_value(sample_user_json()).unwrap();
        assert!(!user.uses_third_party_login());

        user.google_id = Some("108234".to_string());
        assert!(user.uses_third_party_login());
    }

    #[test]
    fn dob_parses_iso_date() {
        let user: User = serde_json::from_value(sample_user_json()).unwrap();
        let date = user.dob_date().expect("valid date");
        assert_eq!(date.to_string(), "1914-04-04");
    }

    #[test]
    fn malformed_dob_parses_to_none() {
        let mut user: User = serde_json::from_value(sample_user_json()).unwrap();
        user.dob = Some("04/04/1914".to_string());
        assert!(user.dob_date().is_none());
    }

    #[test]
    fn profile_update_serializes_with_server_field_names() {
        let update = ProfileUpdate {
            firstname: "Ada".into(),
            lastname: "Lovelace".into(),
            bio: String::new(),
            dob: "1815-12-10".into(),
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "firstname": "Ada",
                "lastname": "Lovelace",
                "bio": "",
                "dob": "1815-12-10"
            })
        );
    }

    #[test]
    fn password_change_uses_camel_case_keys() {
        let change = PasswordChange {
            old_password: "hunter2".into(),
            new_password: "correct horse".into(),
        };
        let value = serde_json::to_value(&change).unwrap();
        assert!(value.get("oldPassword").is_some());
        assert!(value.get("newPassword").is_some());
    }
}
