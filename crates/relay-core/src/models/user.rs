//! User and role models consumed through the directory contract.

use serde::{Deserialize, Serialize};

/// Role a directory user holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Ordinary document writer
    General,

    /// May appear in approval chains
    Approver,

    /// Administrative user
    Admin,
}

/// A directory entry resolving an account to a display identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Stable internal identifier
    pub user_id: String,

    /// Login account the workflow uses as the approver identity
    pub account: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Role of the user
    pub role: UserRole,
}
