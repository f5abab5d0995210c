mod ai;
mod area;
mod category;
mod menu;
mod order;
mod store;

pub use self::ai::{CreateAiLogRequest, SearchAiLogs};
pub use self::area::{AreaRequest, SearchAreas};
pub use self::category::{CategoryRequest, SearchCategories};
pub use self::menu::{MenuRequest, SearchMenus};
pub use self::order::{
    CreateOrderItemRequest, CreateOrderRequest, SearchOrders, UpdateOrderStatusRequest,
};
pub use self::store::{SearchStores, StoreRequest};

pub(crate) fn default_page() -> i64 {
    0
}

pub(crate) fn default_size() -> i64 {
    10
}
