use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::customer::service::{DynCustomerCommandService, DynCustomerQueryService},
    domain::{
        requests::{CreateCustomerRequest, FindCustomers, UpdateCustomerRequest},
        responses::{ApiResponse, CustomerResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customer",
    params(FindCustomers),
    responses(
        (status = 200, description = "List of customers", body = ApiResponse<Vec<CustomerResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_customers(
    Extension(service): Extension<DynCustomerQueryService>,
    Query(params): Query<FindCustomers>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all(&params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "Customer",
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = ApiResponse<CustomerResponse>),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_customer(
    Extension(service): Extension<DynCustomerQueryService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "Customer",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = ApiResponse<CustomerResponse>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Customer with this phone number and national ID already exists"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    Json(body): Json<CreateCustomerRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = "Customer",
    params(("id" = Uuid, Path, description = "Customer ID")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = ApiResponse<CustomerResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Customer not found"),
        (status = 409, description = "Customer with this phone number and national ID already exists"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCustomerRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.update(id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "Customer",
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deleted", body = serde_json::Value),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.delete(id).await?;
    Ok(Json(response))
}

pub fn customer_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/customers", get(get_customers))
        .route("/api/customers/{id}", get(get_customer))
        .route("/api/customers", post(create_customer))
        .route("/api/customers/{id}", put(update_customer))
        .route("/api/customers/{id}", delete(delete_customer))
        .layer(Extension(app_state.di_container.customer_query.service.clone()))
        .layer(Extension(
            app_state.di_container.customer_command.service.clone(),
        ))
}
