mod command;
mod query;

pub use self::command::{StoreCommandService, StoreCommandServiceDeps};
pub use self::query::StoreQueryService;
