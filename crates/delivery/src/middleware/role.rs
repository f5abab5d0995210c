use shared::{config::Claims, errors::HttpError, model::Role};

/// Role list a handler is gated on.
#[derive(Debug, Clone, Copy)]
pub struct AllowedRoles(pub &'static [Role]);

pub const ALL_ROLES: AllowedRoles =
    AllowedRoles(&[Role::Master, Role::Manager, Role::Owner, Role::Customer]);
pub const STAFF: AllowedRoles = AllowedRoles(&[Role::Master, Role::Manager]);
pub const STORE_STAFF: AllowedRoles = AllowedRoles(&[Role::Master, Role::Manager, Role::Owner]);
pub const CUSTOMERS: AllowedRoles = AllowedRoles(&[Role::Customer]);
pub const ORDER_PLACERS: AllowedRoles = AllowedRoles(&[Role::Customer, Role::Owner]);
pub const ORDER_CANCELLERS: AllowedRoles =
    AllowedRoles(&[Role::Customer, Role::Master, Role::Manager]);

/// Authorization gate called at the top of each handler, after
/// `auth_middleware` has verified the token and attached the claims.
pub fn require_role(claims: &Claims, allowed: AllowedRoles) -> Result<(), HttpError> {
    if !allowed.0.contains(&claims.role) {
        return Err(HttpError::Forbidden(format!(
            "Role {} may not access this resource",
            claims.role
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn claims(role: Role) -> Claims {
        Claims {
            user_id: Uuid::new_v4(),
            role,
            exp: 0,
            iat: 0,
        }
    }

    #[test]
    fn staff_groups_exclude_customers() {
        assert!(require_role(&claims(Role::Customer), STAFF).is_err());
        assert!(require_role(&claims(Role::Customer), STORE_STAFF).is_err());
        assert!(require_role(&claims(Role::Customer), ALL_ROLES).is_ok());
        assert!(require_role(&claims(Role::Manager), STAFF).is_ok());
    }

    #[test]
    fn owners_can_place_but_not_cancel() {
        assert!(require_role(&claims(Role::Owner), ORDER_PLACERS).is_ok());
        assert!(require_role(&claims(Role::Owner), ORDER_CANCELLERS).is_err());
        assert!(require_role(&claims(Role::Customer), CUSTOMERS).is_ok());
    }
}
