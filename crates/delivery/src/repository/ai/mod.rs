mod command;
mod query;

pub use self::command::AiLogCommandRepository;
pub use self::query::AiLogQueryRepository;
