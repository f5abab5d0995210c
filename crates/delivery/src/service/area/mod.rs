mod command;
mod query;

pub use self::command::AreaCommandService;
pub use self::query::AreaQueryService;
