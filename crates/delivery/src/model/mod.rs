mod ai_log;
mod area;
mod category;
mod menu;
mod order;
mod store;
mod user;

pub use self::ai_log::AiLog;
pub use self::area::Area;
pub use self::category::Category;
pub use self::menu::Menu;
pub use self::order::{
    ItemDraft, MAX_ADDRESS_LEN, Order, OrderAggregate, OrderItem, OrderStatus, OrderType,
};
pub use self::store::{Store, StoreCategory};
pub use self::user::User;
