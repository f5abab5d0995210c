use crate::{
    abstract_trait::{
        DynAiLogCommandRepository, DynAiLogCommandService, DynAiLogQueryRepository,
        DynAiLogQueryService, DynAreaCommandRepository, DynAreaCommandService,
        DynAreaQueryRepository, DynAreaQueryService, DynCategoryCommandRepository,
        DynCategoryCommandService, DynCategoryQueryRepository, DynCategoryQueryService,
        DynMenuCommandRepository, DynMenuCommandService, DynMenuQueryRepository,
        DynMenuQueryService, DynOrderCommandRepository, DynOrderCommandService,
        DynOrderQueryRepository, DynOrderQueryService, DynStoreCommandRepository,
        DynStoreCommandService, DynStoreQueryRepository, DynStoreQueryService,
        DynUserQueryRepository,
    },
    repository::{
        AiLogCommandRepository, AiLogQueryRepository, AreaCommandRepository, AreaQueryRepository,
        CategoryCommandRepository, CategoryQueryRepository, MenuCommandRepository,
        MenuQueryRepository, OrderCommandRepository, OrderQueryRepository, StoreCommandRepository,
        StoreQueryRepository, UserQueryRepository,
    },
    service::{
        AiLogCommandService, AiLogQueryService, AreaCommandService, AreaQueryService,
        CategoryCommandService, CategoryQueryService, MenuCommandService, MenuCommandServiceDeps,
        MenuQueryService, OrderCommandService, OrderCommandServiceDeps, OrderQueryService,
        StoreCommandService, StoreCommandServiceDeps, StoreQueryService,
    },
};
use shared::config::ConnectionPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub area_query: DynAreaQueryService,
    pub area_command: DynAreaCommandService,
    pub category_query: DynCategoryQueryService,
    pub category_command: DynCategoryCommandService,
    pub store_query: DynStoreQueryService,
    pub store_command: DynStoreCommandService,
    pub menu_query: DynMenuQueryService,
    pub menu_command: DynMenuCommandService,
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
    pub ai_query: DynAiLogQueryService,
    pub ai_command: DynAiLogCommandService,
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let user_query_repo =
            Arc::new(UserQueryRepository::new(pool.clone())) as DynUserQueryRepository;

        let area_query_repo =
            Arc::new(AreaQueryRepository::new(pool.clone())) as DynAreaQueryRepository;
        let area_command_repo =
            Arc::new(AreaCommandRepository::new(pool.clone())) as DynAreaCommandRepository;

        let category_query_repo =
            Arc::new(CategoryQueryRepository::new(pool.clone())) as DynCategoryQueryRepository;
        let category_command_repo =
            Arc::new(CategoryCommandRepository::new(pool.clone())) as DynCategoryCommandRepository;

        let store_query_repo =
            Arc::new(StoreQueryRepository::new(pool.clone())) as DynStoreQueryRepository;
        let store_command_repo =
            Arc::new(StoreCommandRepository::new(pool.clone())) as DynStoreCommandRepository;

        let menu_query_repo =
            Arc::new(MenuQueryRepository::new(pool.clone())) as DynMenuQueryRepository;
        let menu_command_repo =
            Arc::new(MenuCommandRepository::new(pool.clone())) as DynMenuCommandRepository;

        let order_query_repo =
            Arc::new(OrderQueryRepository::new(pool.clone())) as DynOrderQueryRepository;
        let order_command_repo =
            Arc::new(OrderCommandRepository::new(pool.clone())) as DynOrderCommandRepository;

        let ai_query_repo =
            Arc::new(AiLogQueryRepository::new(pool.clone())) as DynAiLogQueryRepository;
        let ai_command_repo =
            Arc::new(AiLogCommandRepository::new(pool)) as DynAiLogCommandRepository;

        let area_query =
            Arc::new(AreaQueryService::new(area_query_repo.clone())) as DynAreaQueryService;
        let area_command =
            Arc::new(AreaCommandService::new(area_command_repo)) as DynAreaCommandService;

        let category_query = Arc::new(CategoryQueryService::new(category_query_repo.clone()))
            as DynCategoryQueryService;
        let category_command = Arc::new(CategoryCommandService::new(category_command_repo))
            as DynCategoryCommandService;

        let store_query =
            Arc::new(StoreQueryService::new(store_query_repo.clone())) as DynStoreQueryService;
        let store_command = Arc::new(StoreCommandService::new(StoreCommandServiceDeps {
            user_query: user_query_repo,
            area_query: area_query_repo,
            category_query: category_query_repo.clone(),
            command: store_command_repo,
        })) as DynStoreCommandService;

        let menu_query = Arc::new(MenuQueryService::new(
            store_query_repo.clone(),
            menu_query_repo.clone(),
        )) as DynMenuQueryService;
        let menu_command = Arc::new(MenuCommandService::new(MenuCommandServiceDeps {
            store_query: store_query_repo.clone(),
            category_query: category_query_repo,
            command: menu_command_repo,
        })) as DynMenuCommandService;

        let order_query =
            Arc::new(OrderQueryService::new(order_query_repo.clone())) as DynOrderQueryService;
        let order_command = Arc::new(OrderCommandService::new(OrderCommandServiceDeps {
            store_query: store_query_repo,
            menu_query: menu_query_repo,
            query: order_query_repo,
            command: order_command_repo,
        })) as DynOrderCommandService;

        let ai_query = Arc::new(AiLogQueryService::new(ai_query_repo)) as DynAiLogQueryService;
        let ai_command =
            Arc::new(AiLogCommandService::new(ai_command_repo)) as DynAiLogCommandService;

        Self {
            area_query,
            area_command,
            category_query,
            category_command,
            store_query,
            store_command,
            menu_query,
            menu_command,
            order_query,
            order_command,
            ai_query,
            ai_command,
        }
    }
}
