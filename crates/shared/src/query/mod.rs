mod predicate;
mod search;

pub use self::predicate::{Join, Predicate};
pub use self::search::{PageRequest, SearchQuery};
