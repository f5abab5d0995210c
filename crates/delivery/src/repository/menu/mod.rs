mod command;
mod query;

pub use self::command::MenuCommandRepository;
pub use self::query::MenuQueryRepository;
