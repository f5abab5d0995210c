use crate::{
    abstract_trait::{DynStoreCommandService, DynStoreQueryService},
    domain::{
        requests::{SearchStores, StoreRequest},
        response::StoreResponse,
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
    path = "/api/stores",
    tag = "Store",
    security(("bearer_auth" = [])),
    params(SearchStores),
    responses(
        (status = 200, description = "List of stores", body = ApiResponsePagination<Vec<StoreResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 400, description = "Invalid pagination")
    )
)]
pub async fn search_stores(
    Extension(service): Extension<DynStoreQueryService>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<SearchStores>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, ALL_ROLES)?;
    let response = service.search(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/stores",
    tag = "Store",
    security(("bearer_auth" = [])),
    request_body = StoreRequest,
    responses(
        (status = 201, description = "Store created", body = ApiResponse<StoreResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Referenced owner, area or category not found"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_store(
    Extension(service): Extension<DynStoreCommandService>,
    Extension(claims): Extension<Claims>,
    SimpleValidatedJson(body): SimpleValidatedJson<StoreRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, STORE_STAFF)?;
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/stores/{store_id}",
    tag = "Store",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID")),
    request_body = StoreRequest,
    responses(
        (status = 200, description = "Store updated", body = ApiResponse<StoreResponse>),
        (status = 404, description = "Store not found")
    )
)]
pub async fn update_store(
    Extension(service): Extension<DynStoreCommandService>,
    Extension(claims): Extension<Claims>,
    Path(store_id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<StoreRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, STORE_STAFF)?;
    let response = service.update(store_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/stores/{store_id}",
    tag = "Store",
    security(("bearer_auth" = [])),
    params(("store_id" = Uuid, Path, description = "Store ID")),
    responses(
        (status = 200, description = "Store soft-deleted", body = ApiResponse<StoreResponse>),
        (status = 404, description = "Store not found")
    )
)]
pub async fn delete_store(
    Extension(service): Extension<DynStoreCommandService>,
    Extension(claims): Extension<Claims>,
    Path(store_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, STORE_STAFF)?;
    let response = service.delete(store_id, claims.user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn store_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/stores", get(search_stores).post(create_store))
        .route(
            "/api/stores/{store_id}",
            put(update_store).delete(delete_store),
        )
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.store_query.clone()))
        .layer(Extension(app_state.di_container.store_command.clone()))
        .layer(Extension(app_state.jwt.clone()))
}
