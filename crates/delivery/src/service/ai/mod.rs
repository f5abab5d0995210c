mod command;
mod query;

pub use self::command::AiLogCommandService;
pub use self::query::AiLogQueryService;
