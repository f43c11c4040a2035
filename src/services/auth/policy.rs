/*
 * Responsibility
 * - Authorization predicates over a verified claim set
 * - Pure functions, no I/O; handlers call these explicitly after the auth
 *   gate has authenticated the request
 */
use thiserror::Error;
use uuid::Uuid;

use crate::services::auth::token::{Claims, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("forbidden")]
    Forbidden,
}

/// Succeeds iff the claim role is exactly `role`.
///
/// No hierarchy: ADMIN does not satisfy a USER-only check or vice versa.
pub fn require_role(claims: &Claims, role: Role) -> Result<(), PolicyError> {
    if claims.role == role {
        Ok(())
    } else {
        Err(PolicyError::Forbidden)
    }
}

/// Succeeds iff the principal is an admin or is acting on its own record.
pub fn require_owner_or_admin(claims: &Claims, target_id: Uuid) -> Result<(), PolicyError> {
    if claims.role == Role::Admin || claims.sub == target_id {
        Ok(())
    } else {
        Err(PolicyError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: Uuid, role: Role) -> Claims {
        Claims {
            sub,
            email: "a@b.c".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            role,
            exp: 0,
        }
    }

    #[test]
    fn require_role_is_exact_match() {
        let admin = claims(Uuid::new_v4(), Role::Admin);
        let user = claims(Uuid::new_v4(), Role::User);

        assert!(require_role(&admin, Role::Admin).is_ok());
        assert!(require_role(&user, Role::User).is_ok());

        // No hierarchy in either direction.
        assert_eq!(require_role(&user, Role::Admin), Err(PolicyError::Forbidden));
        assert_eq!(require_role(&admin, Role::User), Err(PolicyError::Forbidden));
    }

    #[test]
    fn owner_or_admin_truth_table() {
        let u1 = Uuid::new_v4();
        let u2 = Uuid::new_v4();

        // Admin override on someone else's record.
        assert!(require_owner_or_admin(&claims(u1, Role::Admin), u2).is_ok());
        // Self match.
        assert!(require_owner_or_admin(&claims(u1, Role::User), u1).is_ok());
        // Plain user on someone else's record.
        assert_eq!(
            require_owner_or_admin(&claims(u1, Role::User), u2),
            Err(PolicyError::Forbidden)
        );
    }
}
