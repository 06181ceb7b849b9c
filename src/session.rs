// SPDX-License-Identifier: MPL-2.0
//! Cached copy of the server-confirmed user record.
//!
//! The store is the only owner of the cached `User`. Mutations go through
//! exactly two entry points: [`SessionStore::commit`] replaces the record
//! wholesale from a server response (last-write-wins, no field merging), and
//! [`SessionStore::clear`] drops it on logout. Form drafts never write here.

use crate::api::User;

#[derive(Debug, Default)]
pub struct SessionStore {
    user: Option<User>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached record with a server response.
    pub fn commit(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Drops the cached record (successful logout only).
    pub fn clear(&mut self) {
        self.user = None;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: &str) -> User {
        serde_json::from_value(serde_json::json!({
            "username": username,
            "email": format!("{username}@example.org"),
        }))
        .expect("minimal user json")
    }

    #[test]
    fn new_store_is_unauthenticated() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn commit_replaces_record_wholesale() {
        let mut store = SessionStore::new();
        store.commit(user("first"));
        store.commit(user("second"));

        assert_eq!(store.user().unwrap().username, "second");
    }

    #[test]
    fn clear_drops_record() {
        let mut store = SessionStore::new();
        store.commit(user("someone"));
        store.clear();

        assert!(!store.is_authenticated());
    }
}
