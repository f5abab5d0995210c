use crate::{
    abstract_trait::{DynCategoryCommandService, DynCategoryQueryService},
    domain::{
        requests::{CategoryRequest, SearchCategories},
        response::CategoryResponse,
    },
    middleware::{ALL_ROLES, STAFF, SimpleValidatedJson, auth_middleware, require_role},
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
    path = "/api/categories",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(SearchCategories),
    responses(
        (status = 200, description = "List of categories", body = ApiResponsePagination<Vec<CategoryResponse>>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn search_categories(
    Extension(service): Extension<DynCategoryQueryService>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<SearchCategories>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, ALL_ROLES)?;
    let response = service.search(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Category",
    security(("bearer_auth" = [])),
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_category(
    Extension(service): Extension<DynCategoryCommandService>,
    Extension(claims): Extension<Claims>,
    SimpleValidatedJson(body): SimpleValidatedJson<CategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, STAFF)?;
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/categories/{category_id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("category_id" = Uuid, Path, description = "Category ID")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    Extension(service): Extension<DynCategoryCommandService>,
    Extension(claims): Extension<Claims>,
    Path(category_id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<CategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, STAFF)?;
    let response = service.update(category_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{category_id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("category_id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category soft-deleted", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    Extension(service): Extension<DynCategoryCommandService>,
    Extension(claims): Extension<Claims>,
    Path(category_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, STAFF)?;
    let response = service.delete(category_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/categories", get(search_categories).post(create_category))
        .route(
            "/api/categories/{category_id}",
            put(update_category).delete(delete_category),
        )
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.category_query.clone()))
        .layer(Extension(app_state.di_container.category_command.clone()))
        .layer(Extension(app_state.jwt.clone()))
}
