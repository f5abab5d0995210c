mod ai;
mod area;
mod category;
mod menu;
mod order;
mod store;
mod user;

pub use self::ai::{
    AiLogCommandRepositoryTrait, AiLogCommandServiceTrait, AiLogQueryRepositoryTrait,
    AiLogQueryServiceTrait, DynAiLogCommandRepository, DynAiLogCommandService,
    DynAiLogQueryRepository, DynAiLogQueryService,
};
pub use self::area::{
    AreaCommandRepositoryTrait, AreaCommandServiceTrait, AreaQueryRepositoryTrait,
    AreaQueryServiceTrait, DynAreaCommandRepository, DynAreaCommandService,
    DynAreaQueryRepository, DynAreaQueryService,
};
pub use self::category::{
    CategoryCommandRepositoryTrait, CategoryCommandServiceTrait, CategoryQueryRepositoryTrait,
    CategoryQueryServiceTrait, DynCategoryCommandRepository, DynCategoryCommandService,
    DynCategoryQueryRepository, DynCategoryQueryService,
};
pub use self::menu::{
    DynMenuCommandRepository, DynMenuCommandService, DynMenuQueryRepository, DynMenuQueryService,
    MenuCommandRepositoryTrait, MenuCommandServiceTrait, MenuQueryRepositoryTrait,
    MenuQueryServiceTrait,
};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::store::{
    DynStoreCommandRepository, DynStoreCommandService, DynStoreQueryRepository,
    DynStoreQueryService, StoreCommandRepositoryTrait, StoreCommandServiceTrait,
    StoreQueryRepositoryTrait, StoreQueryServiceTrait,
};
pub use self::user::{DynUserQueryRepository, UserQueryRepositoryTrait};
