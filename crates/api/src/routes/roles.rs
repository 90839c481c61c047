//! Role listing route handlers.
//!
//! Exposes the built-in role registry and the action grants assigned to
//! each role at startup.

use axum::Json;
use domain::models::role::{ListRolesResponse, Role, RoleInfo};

use crate::error::ApiError;
use crate::extractors::UserAuth;

/// List built-in roles and their action grants.
///
/// GET /api/v1/roles
///
/// Requires authentication; any role may read the registry.
pub async fn list_roles(_user: UserAuth) -> Result<Json<ListRolesResponse>, ApiError> {
    let data: Vec<RoleInfo> = Role::all().iter().copied().map(RoleInfo::from).collect();

    Ok(Json(ListRolesResponse { data }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_registry_covers_all_roles() {
        let data: Vec<RoleInfo> = Role::all().iter().copied().map(RoleInfo::from).collect();
        assert_eq!(data.len(), 3);

        let member = data.iter().find(|info| info.role == Role::Member).unwrap();
        assert_eq!(
            member.actions,
            vec!["movies.new", "movies.edit.own", "movies.remove.own"]
        );
    }
}
