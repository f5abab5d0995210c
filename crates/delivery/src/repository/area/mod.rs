mod command;
mod query;

pub use self::command::AreaCommandRepository;
pub use self::query::AreaQueryRepository;
