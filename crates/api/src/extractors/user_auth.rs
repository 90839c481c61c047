//! User JWT authentication extractor.
//!
//! Validates the Bearer token in the Authorization header and exposes the
//! authenticated user's id and role to handlers. Mutations pull this in;
//! the read endpoints stay public.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::str::FromStr;
use uuid::Uuid;

use domain::models::Role;
use shared::jwt::extract_user_id;

use crate::app::AppState;
use crate::error::ApiError;

/// Authenticated user information from JWT.
#[derive(Debug, Clone)]
pub struct UserAuth {
    /// User ID from the JWT subject claim.
    pub user_id: Uuid,
    /// Role carried by the token.
    pub role: Role,
    /// JWT ID (jti) for log correlation.
    pub jti: String,
}

#[async_trait]
impl FromRequestParts<AppState> for UserAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::Unauthorized("Invalid Authorization header format".to_string())
        })?;

        let claims = state
            .jwt
            .validate_token(token)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

        let user_id = extract_user_id(&claims)
            .map_err(|_| ApiError::Unauthorized("Invalid token subject".to_string()))?;

        let role = Role::from_str(&claims.role)
            .map_err(|_| ApiError::Unauthorized("Unknown role in token".to_string()))?;

        Ok(UserAuth {
            user_id,
            role,
            jti: claims.jti,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_auth_struct() {
        let auth = UserAuth {
            user_id: Uuid::new_v4(),
            role: Role::Member,
            jti: "test_jti".to_string(),
        };
        assert_eq!(auth.role, Role::Member);
        assert!(!auth.jti.is_empty());
    }

    #[test]
    fn test_user_auth_clone() {
        let auth = UserAuth {
            user_id: Uuid::new_v4(),
            role: Role::Admin,
            jti: "test_jti".to_string(),
        };
        let cloned = auth.clone();
        assert_eq!(auth.user_id, cloned.user_id);
        assert_eq!(auth.role, cloned.role);
    }

    #[test]
    fn test_user_auth_debug() {
        let auth = UserAuth {
            user_id: Uuid::new_v4(),
            role: Role::Guest,
            jti: "test_jti".to_string(),
        };
        let debug_str = format!("{:?}", auth);
        assert!(debug_str.contains("UserAuth"));
        assert!(debug_str.contains("Guest"));
    }
}
