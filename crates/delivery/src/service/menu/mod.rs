mod command;
mod query;

pub use self::command::{MenuCommandService, MenuCommandServiceDeps};
pub use self::query::MenuQueryService;
