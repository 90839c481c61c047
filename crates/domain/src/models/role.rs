//! Roles and action permissions for the Movies collection.
//!
//! Actions are dotted identifiers checked before a mutation executes.
//! `.own` actions apply only to documents the caller created; `.all`
//! actions apply unconditionally.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Create a new movie.
pub const MOVIES_NEW: &str = "movies.new";
/// Edit a movie the caller owns.
pub const MOVIES_EDIT_OWN: &str = "movies.edit.own";
/// Remove a movie the caller owns.
pub const MOVIES_REMOVE_OWN: &str = "movies.remove.own";
/// Edit any movie.
pub const MOVIES_EDIT_ALL: &str = "movies.edit.all";
/// Remove any movie.
pub const MOVIES_REMOVE_ALL: &str = "movies.remove.all";

/// Actions granted to regular members.
pub const MEMBER_ACTIONS: &[&str] = &[MOVIES_NEW, MOVIES_EDIT_OWN, MOVIES_REMOVE_OWN];

/// Actions granted to admins.
pub const ADMIN_ACTIONS: &[&str] = &[
    MOVIES_NEW,
    MOVIES_EDIT_OWN,
    MOVIES_REMOVE_OWN,
    MOVIES_EDIT_ALL,
    MOVIES_REMOVE_ALL,
];

/// Built-in roles. Every authenticated user carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Unauthenticated or read-only caller.
    Guest,
    /// Regular user.
    Member,
    /// Full access to all documents.
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Member => "member",
            Role::Admin => "admin",
        }
    }

    /// Actions granted to this role.
    pub fn actions(&self) -> &'static [&'static str] {
        match self {
            Role::Guest => &[],
            Role::Member => MEMBER_ACTIONS,
            Role::Admin => ADMIN_ACTIONS,
        }
    }

    /// Whether this role holds the given action grant.
    pub fn can(&self, action: &str) -> bool {
        self.actions().contains(&action)
    }

    /// Whether this role may create new movies.
    pub fn can_create_movie(&self) -> bool {
        self.can(MOVIES_NEW)
    }

    /// Whether this role may edit a movie, given document ownership.
    pub fn can_edit_movie(&self, is_owner: bool) -> bool {
        self.can(MOVIES_EDIT_ALL) || (is_owner && self.can(MOVIES_EDIT_OWN))
    }

    /// Whether this role may remove a movie, given document ownership.
    pub fn can_remove_movie(&self, is_owner: bool) -> bool {
        self.can(MOVIES_REMOVE_ALL) || (is_owner && self.can(MOVIES_REMOVE_OWN))
    }

    /// All built-in roles.
    pub fn all() -> &'static [Role] {
        &[Role::Guest, Role::Member, Role::Admin]
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "guest" => Ok(Role::Guest),
            "member" => Ok(Role::Member),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role with its grants, for the role listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RoleInfo {
    pub role: Role,
    pub actions: Vec<String>,
}

impl From<Role> for RoleInfo {
    fn from(role: Role) -> Self {
        Self {
            role,
            actions: role.actions().iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Response for listing roles and their grants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListRolesResponse {
    pub data: Vec<RoleInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_actions_exact() {
        let actions = Role::Member.actions();
        assert_eq!(
            actions,
            &["movies.new", "movies.edit.own", "movies.remove.own"]
        );
    }

    #[test]
    fn test_member_has_no_all_grants() {
        assert!(!Role::Member.can(MOVIES_EDIT_ALL));
        assert!(!Role::Member.can(MOVIES_REMOVE_ALL));
    }

    #[test]
    fn test_guest_has_no_grants() {
        assert!(Role::Guest.actions().is_empty());
        assert!(!Role::Guest.can(MOVIES_NEW));
    }

    #[test]
    fn test_admin_actions_superset_of_member() {
        for action in MEMBER_ACTIONS {
            assert!(Role::Admin.can(action));
        }
        assert!(Role::Admin.can(MOVIES_EDIT_ALL));
        assert!(Role::Admin.can(MOVIES_REMOVE_ALL));
    }

    #[test]
    fn test_can_create_movie() {
        assert!(!Role::Guest.can_create_movie());
        assert!(Role::Member.can_create_movie());
        assert!(Role::Admin.can_create_movie());
    }

    #[test]
    fn test_can_edit_movie_ownership() {
        // Members can only edit their own documents
        assert!(Role::Member.can_edit_movie(true));
        assert!(!Role::Member.can_edit_movie(false));

        // Admins can edit any document
        assert!(Role::Admin.can_edit_movie(true));
        assert!(Role::Admin.can_edit_movie(false));

        // Guests can edit nothing
        assert!(!Role::Guest.can_edit_movie(true));
    }

    #[test]
    fn test_can_remove_movie_ownership() {
        assert!(Role::Member.can_remove_movie(true));
        assert!(!Role::Member.can_remove_movie(false));
        assert!(Role::Admin.can_remove_movie(false));
        assert!(!Role::Guest.can_remove_movie(true));
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!(Role::from_str("member").unwrap(), Role::Member);
        assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
        assert_eq!(Role::from_str("Guest").unwrap(), Role::Guest);
        assert!(Role::from_str("owner").is_err());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Member.to_string(), "member");
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&Role::Member).unwrap(),
            "\"member\""
        );
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_role_info_from_role() {
        let info: RoleInfo = Role::Member.into();
        assert_eq!(info.role, Role::Member);
        assert_eq!(info.actions.len(), 3);
        assert!(info.actions.iter().any(|a| a == "movies.new"));
    }

    #[test]
    fn test_all_roles() {
        let all = Role::all();
        assert_eq!(all.len(), 3);
        assert!(all.contains(&Role::Guest));
        assert!(all.contains(&Role::Admin));
    }
}
