use crate::{
    abstract_trait::{DynAreaCommandService, DynAreaQueryService},
    domain::{
        requests::{AreaRequest, SearchAreas},
        response::AreaResponse,
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
    path = "/api/areas",
    tag = "Area",
    security(("bearer_auth" = [])),
    params(SearchAreas),
    responses(
        (status = 200, description = "List of areas", body = ApiResponsePagination<Vec<AreaResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 400, description = "Invalid pagination")
    )
)]
pub async fn search_areas(
    Extension(service): Extension<DynAreaQueryService>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<SearchAreas>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, ALL_ROLES)?;
    let response = service.search(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/areas",
    tag = "Area",
    security(("bearer_auth" = [])),
    request_body = AreaRequest,
    responses(
        (status = 201, description = "Area created", body = ApiResponse<AreaResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn create_area(
    Extension(service): Extension<DynAreaCommandService>,
    Extension(claims): Extension<Claims>,
    SimpleValidatedJson(body): SimpleValidatedJson<AreaRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, STAFF)?;
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/areas/{area_id}",
    tag = "Area",
    security(("bearer_auth" = [])),
    params(("area_id" = Uuid, Path, description = "Area ID")),
    request_body = AreaRequest,
    responses(
        (status = 200, description = "Area updated", body = ApiResponse<AreaResponse>),
        (status = 404, description = "Area not found"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn update_area(
    Extension(service): Extension<DynAreaCommandService>,
    Extension(claims): Extension<Claims>,
    Path(area_id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<AreaRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, STAFF)?;
    let response = service.update(area_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/areas/{area_id}",
    tag = "Area",
    security(("bearer_auth" = [])),
    params(("area_id" = Uuid, Path, description = "Area ID")),
    responses(
        (status = 200, description = "Area soft-deleted", body = ApiResponse<AreaResponse>),
        (status = 404, description = "Area not found"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn delete_area(
    Extension(service): Extension<DynAreaCommandService>,
    Extension(claims): Extension<Claims>,
    Path(area_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, STAFF)?;
    let response = service.delete(area_id, claims.user_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn area_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/areas", get(search_areas).post(create_area))
        .route("/api/areas/{area_id}", put(update_area).delete(delete_area))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.area_query.clone()))
        .layer(Extension(app_state.di_container.area_command.clone()))
        .layer(Extension(app_state.jwt.clone()))
}
