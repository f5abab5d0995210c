mod command;
mod query;

pub use self::command::StoreCommandRepository;
pub use self::query::StoreQueryRepository;
