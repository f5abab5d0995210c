mod ai;
mod area;
mod category;
mod menu;
mod order;
mod store;
mod user;

pub use self::ai::{AiLogCommandRepository, AiLogQueryRepository};
pub use self::area::{AreaCommandRepository, AreaQueryRepository};
pub use self::category::{CategoryCommandRepository, CategoryQueryRepository};
pub use self::menu::{MenuCommandRepository, MenuQueryRepository};
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::store::{StoreCommandRepository, StoreQueryRepository};
pub use self::user::UserQueryRepository;
