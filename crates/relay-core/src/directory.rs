//! User directory seam.
//!
//! The engine resolves display names through a [`UserDirectory`] so the
//! workflow logic stays independent of where identities actually live
//! (LDAP, HR export, config file). [`StaticDirectory`] is the in-memory
//! implementation used by the CLI and tests.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::models::{User, UserRole};

/// Read-only lookup of user identities.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Looks up a user by account. Returns `None` for unknown accounts;
    /// callers fall back to the raw account string for display.
    async fn lookup(&self, account: &str) -> Option<User>;

    /// All users holding the given role.
    async fn users_in_role(&self, role: UserRole) -> Vec<User>;
}

/// In-memory directory seeded from a fixed user list.
pub struct StaticDirectory {
    users: HashMap<String, User>,
}

impl StaticDirectory {
    /// Builds a directory from a list of users, keyed by account.
    pub fn new(users: Vec<User>) -> Self {
        let users = users.into_iter().map(|u| (u.account.clone(), u)).collect();
        Self { users }
    }

    /// A small seeded roster for demos and tests.
    pub fn with_sample_users() -> Self {
        Self::new(vec![
            User {
                user_id: "u1".to_string(),
                account: "hkim".to_string(),
                name: "Hana Kim".to_string(),
                email: "hkim@example.com".to_string(),
                role: UserRole::General,
            },
            User {
                user_id: "u2".to_string(),
                account: "jlee".to_string(),
                name: "Jun Lee".to_string(),
                email: "jlee@example.com".to_string(),
                role: UserRole::Approver,
            },
            User {
                user_id: "u3".to_string(),
                account: "mpark".to_string(),
                name: "Min Park".to_string(),
                email: "mpark@example.com".to_string(),
                role: UserRole::Approver,
            },
            User {
                user_id: "u4".to_string(),
                account: "schoi".to_string(),
                name: "Seo Choi".to_string(),
                email: "schoi@example.com".to_string(),
                role: UserRole::Admin,
            },
        ])
    }
}

#[async_trait]
impl UserDirectory for StaticDirectory {
    async fn lookup(&self, account: &str) -> Option<User> {
        self.users.get(account).cloned()
    }

    async fn users_in_role(&self, role: UserRole) -> Vec<User> {
        let mut users: Vec<User> = self
            .users
            .values()
            .filter(|u| u.role == role)
            .cloned()
            .collect();
        users.sort_by(|a, b| a.user_id.cmp(&b.user_id));
        users
    }
}
