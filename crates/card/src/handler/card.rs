use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::{
    abstract_trait::card::service::{DynCardCommandService, DynCardQueryService},
    domain::{
        requests::{CardAliasQuery, CreateCardRequest, FindCardById, FindCards, UpdateCardRequest},
        responses::{ApiResponse, CardResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/cards",
    tag = "Card",
    params(FindCards),
    responses(
        (status = 200, description = "List of cards, masked unless unmask is set", body = ApiResponse<Vec<CardResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_cards(
    Extension(service): Extension<DynCardQueryService>,
    Query(params): Query<FindCards>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all(&params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/cards/{id}",
    tag = "Card",
    params(
        ("id" = Uuid, Path, description = "Card ID"),
        FindCardById
    ),
    responses(
        (status = 200, description = "Card details", body = ApiResponse<CardResponse>),
        (status = 404, description = "Card not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_card(
    Extension(service): Extension<DynCardQueryService>,
    Path(id): Path<Uuid>,
    Query(params): Query<FindCardById>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(id, params.unmask).await?;
    Ok(Json(response))
}

/// Service-to-service lookup used by the account issuer to filter accounts
/// by card alias. Returns bare ids, not the response envelope.
#[utoipa::path(
    get,
    path = "/api/cards/internal/account-ids",
    tag = "Card",
    params(CardAliasQuery),
    responses(
        (status = 200, description = "Account ids holding a card with the alias", body = Vec<Uuid>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_internal_account_ids(
    Extension(service): Extension<DynCardQueryService>,
    Query(params): Query<CardAliasQuery>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let ids = service.find_account_ids_by_alias(&params.card_alias).await?;
    Ok(Json(ids))
}

#[utoipa::path(
    post,
    path = "/api/cards",
    tag = "Card",
    request_body = CreateCardRequest,
    responses(
        (status = 201, description = "Card created with masked PAN and CVV", body = ApiResponse<CardResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Account does not exist"),
        (status = 409, description = "Card limit reached or duplicate card type"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_card(
    Extension(service): Extension<DynCardCommandService>,
    Json(body): Json<CreateCardRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/cards/{id}",
    tag = "Card",
    params(("id" = Uuid, Path, description = "Card ID")),
    request_body = UpdateCardRequest,
    responses(
        (status = 200, description = "Card alias updated", body = ApiResponse<CardResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Card not found"),
        (status = 409, description = "Duplicate card alias for this account"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_card(
    Extension(service): Extension<DynCardCommandService>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCardRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.update_alias(id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/cards/{id}",
    tag = "Card",
    params(("id" = Uuid, Path, description = "Card ID")),
    responses(
        (status = 200, description = "Card deleted", body = serde_json::Value),
        (status = 404, description = "Card not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_card(
    Extension(service): Extension<DynCardCommandService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.delete(id).await?;
    Ok(Json(response))
}

pub fn card_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/cards", get(get_cards))
        .route("/api/cards/{id}", get(get_card))
        .route(
            "/api/cards/internal/account-ids",
            get(get_internal_account_ids),
        )
        .route("/api/cards", post(create_card))
        .route("/api/cards/{id}", put(update_card))
        .route("/api/cards/{id}", delete(delete_card))
        .layer(Extension(app_state.di_container.card_query.service.clone()))
        .layer(Extension(app_state.di_container.card_command.service.clone()))
}
