use crate::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::{
            CreateOrderItemRequest, CreateOrderRequest, SearchOrders, UpdateOrderStatusRequest,
        },
        response::OrderResponse,
    },
    middleware::{
        ALL_ROLES, CUSTOMERS, ORDER_CANCELLERS, ORDER_PLACERS, STORE_STAFF, SimpleValidatedJson,
        auth_middleware, require_role,
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, patch, post},
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
    path = "/api/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(SearchOrders),
    responses(
        (status = 200, description = "List of orders", body = ApiResponsePagination<Vec<OrderResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn search_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<SearchOrders>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, STORE_STAFF)?;
    let response = service.search(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{order_id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("order_id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with its items", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    Extension(claims): Extension<Claims>,
    Path(order_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, ALL_ROLES)?;
    let response = service.find_by_id(order_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Validation error or empty item list"),
        (status = 404, description = "Store or menu not found")
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    Extension(claims): Extension<Claims>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, ORDER_PLACERS)?;
    let response = service.create(claims.user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/orders/{order_id}/items",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("order_id" = Uuid, Path, description = "Order ID")),
    request_body = CreateOrderItemRequest,
    responses(
        (status = 200, description = "Item added", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order or menu not found"),
        (status = 409, description = "Order is no longer accepting items")
    )
)]
pub async fn add_order_item(
    Extension(service): Extension<DynOrderCommandService>,
    Extension(claims): Extension<Claims>,
    Path(order_id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, CUSTOMERS)?;
    let response = service.add_item(order_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{order_id}/status",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("order_id" = Uuid, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found"),
        (status = 422, description = "Transition not permitted")
    )
)]
pub async fn update_order_status(
    Extension(service): Extension<DynOrderCommandService>,
    Extension(claims): Extension<Claims>,
    Path(order_id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, STORE_STAFF)?;
    let response = service.update_status(order_id, body.status).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{order_id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("order_id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order cancelled", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found"),
        (status = 422, description = "Order already completed or cancelled")
    )
)]
pub async fn cancel_order(
    Extension(service): Extension<DynOrderCommandService>,
    Extension(claims): Extension<Claims>,
    Path(order_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, ORDER_CANCELLERS)?;
    let response = service.cancel(order_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", get(search_orders).post(create_order))
        .route(
            "/api/orders/{order_id}",
            get(get_order).delete(cancel_order),
        )
        .route("/api/orders/{order_id}/items", post(add_order_item))
        .route("/api/orders/{order_id}/status", patch(update_order_status))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_query.clone()))
        .layer(Extension(app_state.di_container.order_command.clone()))
        .layer(Extension(app_state.jwt.clone()))
}
