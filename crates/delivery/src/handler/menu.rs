use crate::{
    abstract_trait::{DynMenuCommandService, DynMenuQueryService},
    domain::{
        requests::{MenuRequest, SearchMenus},
        response::MenuResponse,
    },
    middleware::{ALL_ROLES, STORE_STAFF, SimpleValidatedJson, auth_middleware, require_role},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, put},
};
use shared::{
    config::Claims,
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/stores/{store_id}/menus",
    tag = "Menu",
    security(("bearer_auth" = [])),
    params(
        ("store_id" = Uuid, Path, description = "Store ID"),
        SearchMenus
    ),
    responses(
        (status = 200, description = "Menus of the store", body = ApiResponsePagination<Vec<MenuResponse>>),
        (status = 404, description = "Store not found")
    )
)]
pub async fn search_menus(
    Extension(service): Extension<DynMenuQueryService>,
    Extension(claims): Extension<Claims>,
    Path(store_id): Path<Uuid>,
    Query(params): Query<SearchMenus>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, ALL_ROLES)?;
    let response = service.search_by_store(store_id, &params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/stores/{store_id}/menus",
    tag = "Menu",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID")),
    request_body = MenuRequest,
    responses(
        (status = 201, description = "Menu created", body = ApiResponse<MenuResponse>),
        (status = 404, description = "Store or category not found"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_menu(
    Extension(service): Extension<DynMenuCommandService>,
    Extension(claims): Extension<Claims>,
    Path(store_id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<MenuRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, STORE_STAFF)?;
    let response = service.create(store_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/menus/{menu_id}",
    tag = "Menu",
    security(("bearer_auth" = [])),
    params(("menu_id" = Uuid, Path, description = "Menu ID")),
    request_body = MenuRequest,
    responses(
        (status = 200, description = "Menu updated", body = ApiResponse<MenuResponse>),
        (status = 404, description = "Menu not found")
    )
)]
pub async fn update_menu(
    Extension(service): Extension<DynMenuCommandService>,
    Extension(claims): Extension<Claims>,
    Path(menu_id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<MenuRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, STORE_STAFF)?;
    let response = service.update(menu_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/menus/{menu_id}",
    tag = "Menu",
    security(("bearer_auth" = [])),
    params(("menu_id" = Uuid, Path, description = "Menu ID")),
    responses(
        (status = 200, description = "Menu soft-deleted", body = ApiResponse<MenuResponse>),
        (status = 404, description = "Menu not found")
    )
)]
pub async fn delete_menu(
    Extension(service): Extension<DynMenuCommandService>,
    Extension(claims): Extension<Claims>,
    Path(menu_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, STORE_STAFF)?;
    let response = service.delete(menu_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn menu_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/stores/{store_id}/menus",
            get(search_menus).post(create_menu),
        )
        .route("/api/menus/{menu_id}", put(update_menu).delete(delete_menu))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.menu_query.clone()))
        .layer(Extension(app_state.di_container.menu_command.clone()))
        .layer(Extension(app_state.jwt.clone()))
}
