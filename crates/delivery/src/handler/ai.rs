use crate::{
    abstract_trait::{DynAiLogCommandService, DynAiLogQueryService},
    domain::{
        requests::{CreateAiLogRequest, SearchAiLogs},
        response::AiLogResponse,
    },
    middleware::{STAFF, STORE_STAFF, SimpleValidatedJson, auth_middleware, require_role},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::{
    config::Claims,
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::HttpError,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/ai/logs",
    tag = "Ai",
    security(("bearer_auth" = [])),
    params(SearchAiLogs),
    responses(
        (status = 200, description = "Recorded AI exchanges, newest first", body = ApiResponsePagination<Vec<AiLogResponse>>),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn get_ai_logs(
    Extension(service): Extension<DynAiLogQueryService>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<SearchAiLogs>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, STAFF)?;
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/ai/logs",
    tag = "Ai",
    security(("bearer_auth" = [])),
    request_body = CreateAiLogRequest,
    responses(
        (status = 201, description = "AI exchange recorded", body = ApiResponse<AiLogResponse>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_ai_log(
    Extension(service): Extension<DynAiLogCommandService>,
    Extension(claims): Extension<Claims>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateAiLogRequest>,
) -> Result<impl IntoResponse, HttpError> {
    require_role(&claims, STORE_STAFF)?;
    let response = service.create(claims.user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn ai_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/ai/logs", get(get_ai_logs).post(create_ai_log))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.ai_query.clone()))
        .layer(Extension(app_state.di_container.ai_command.clone()))
        .layer(Extension(app_state.jwt.clone()))
}
