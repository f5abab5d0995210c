mod app;
mod database;
mod jwt;

pub use self::app::Config;
pub use self::database::{ConnectionManager, ConnectionPool};
pub use self::jwt::{Claims, JwtConfig};
