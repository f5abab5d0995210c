mod ai;
mod area;
mod category;
mod menu;
mod order;
mod store;

pub use self::ai::AiLogResponse;
pub use self::area::AreaResponse;
pub use self::category::CategoryResponse;
pub use self::menu::MenuResponse;
pub use self::order::{OrderItemResponse, OrderResponse};
pub use self::store::StoreResponse;
