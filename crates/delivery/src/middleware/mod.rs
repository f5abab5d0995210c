pub mod jwt;
pub mod role;
pub mod validate;

pub use self::jwt::auth_middleware;
pub use self::role::{
    ALL_ROLES, AllowedRoles, CUSTOMERS, ORDER_CANCELLERS, ORDER_PLACERS, STAFF, STORE_STAFF,
    require_role,
};
pub use self::validate::SimpleValidatedJson;
