use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::account::service::{DynAccountCommandService, DynAccountQueryService},
    domain::{
        requests::{CreateAccountRequest, FindAccounts, UpdateAccountRequest},
        responses::{AccountResponse, ApiResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/accounts",
    tag = "Account",
    params(FindAccounts),
    responses(
        (status = 200, description = "List of accounts", body = ApiResponse<Vec<AccountResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_accounts(
    Extension(service): Extension<DynAccountQueryService>,
    Query(params): Query<FindAccounts>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all(&params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/accounts/{id}",
    tag = "Account",
    params(("id" = Uuid, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account details", body = ApiResponse<AccountResponse>),
        (status = 404, description = "Account not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_account(
    Extension(service): Extension<DynAccountQueryService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/accounts",
    tag = "Account",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<AccountResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Customer does not exist"),
        (status = 409, description = "IBAN already exists"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_account(
    Extension(service): Extension<DynAccountCommandService>,
    Json(body): Json<CreateAccountRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/accounts/{id}",
    tag = "Account",
    params(("id" = Uuid, Path, description = "Account ID")),
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Account updated", body = ApiResponse<AccountResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Account or target customer not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_account(
    Extension(service): Extension<DynAccountCommandService>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateAccountRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.update(id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/accounts/{id}",
    tag = "Account",
    params(("id" = Uuid, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account deleted", body = serde_json::Value),
        (status = 404, description = "Account not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_account(
    Extension(service): Extension<DynAccountCommandService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.delete(id).await?;
    Ok(Json(response))
}

pub fn account_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/accounts", get(get_accounts))
        .route("/api/accounts/{id}", get(get_account))
        .route("/api/accounts", post(create_account))
        .route("/api/accounts/{id}", put(update_account))
        .route("/api/accounts/{id}", delete(delete_account))
        .layer(Extension(app_state.di_container.account_query.service.clone()))
        .layer(Extension(
            app_state.di_container.account_command.service.clone(),
        ))
}
