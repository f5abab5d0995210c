mod ai;
mod area;
mod category;
mod menu;
mod order;
mod store;

use crate::state::AppState;
use anyhow::Result;
use axum::{Json, extract::DefaultBodyLimit, response::IntoResponse, routing::get};
use serde_json::json;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::ai::ai_routes;
pub use self::area::area_routes;
pub use self::category::category_routes;
pub use self::menu::menu_routes;
pub use self::order::order_routes;
pub use self::store::store_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        area::search_areas,
        area::create_area,
        area::update_area,
        area::delete_area,

        category::search_categories,
        category::create_category,
        category::update_category,
        category::delete_category,

        store::search_stores,
        store::create_store,
        store::update_store,
        store::delete_store,

        menu::search_menus,
        menu::create_menu,
        menu::update_menu,
        menu::delete_menu,

        order::search_orders,
        order::get_order,
        order::create_order,
        order::add_order_item,
        order::update_order_status,
        order::cancel_order,

        ai::get_ai_logs,
        ai::create_ai_log,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Area", description = "Delivery area endpoints"),
        (name = "Category", description = "Store category endpoints"),
        (name = "Store", description = "Store endpoints"),
        (name = "Menu", description = "Menu endpoints"),
        (name = "Order", description = "Order endpoints"),
        (name = "Ai", description = "AI log endpoints"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/health", get(health_handler))
            .merge(area_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()))
            .merge(store_routes(shared_state.clone()))
            .merge(menu_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(ai_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📚 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
