use crate::errors::{
    errors::ErrorResponse, repository::RepositoryError, service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        AppErrorHttp(err)
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = match self.0 {
            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),

            ServiceError::CustomerNotFound => {
                (StatusCode::NOT_FOUND, "Customer does not exist".to_string())
            }

            ServiceError::AccountNotFound => {
                (StatusCode::NOT_FOUND, "Account does not exist".to_string())
            }

            ServiceError::DuplicateResource(msg) => (StatusCode::CONFLICT, msg),

            ServiceError::CardLimitExceeded => (
                StatusCode::CONFLICT,
                "Account already has 2 cards".to_string(),
            ),

            ServiceError::DuplicateCardType => (
                StatusCode::CONFLICT,
                "Account already has a card of this type".to_string(),
            ),

            ServiceError::DuplicateAlias => (
                StatusCode::CONFLICT,
                "Duplicate card alias for this account".to_string(),
            ),

            ServiceError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, format!("Validation failed: {errors}"))
            }

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
                RepositoryError::AlreadyExists(msg) => (StatusCode::CONFLICT, msg),
                RepositoryError::Sqlx(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                ),
                RepositoryError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            },

            ServiceError::Client(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Upstream service error".to_string(),
            ),

            ServiceError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),

            ServiceError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::client::ClientError;
    use axum::body::to_bytes;

    async fn status_and_message(err: ServiceError) -> (StatusCode, String) {
        let response = AppErrorHttp(err).into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed.status, "error");
        (status, parsed.message)
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let (status, msg) =
            status_and_message(ServiceError::NotFound("Card not found".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(msg, "Card not found");
    }

    #[tokio::test]
    async fn missing_collaborators_map_to_404() {
        let (status, msg) = status_and_message(ServiceError::CustomerNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(msg, "Customer does not exist");

        let (status, msg) = status_and_message(ServiceError::AccountNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(msg, "Account does not exist");
    }

    #[tokio::test]
    async fn conflicts_map_to_409() {
        let (status, _) =
            status_and_message(ServiceError::DuplicateResource("IBAN already exists".into()))
                .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, msg) = status_and_message(ServiceError::CardLimitExceeded).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(msg, "Account already has 2 cards");

        let (status, msg) = status_and_message(ServiceError::DuplicateCardType).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(msg, "Account already has a card of this type");

        let (status, msg) = status_and_message(ServiceError::DuplicateAlias).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(msg, "Duplicate card alias for this account");
    }

    #[tokio::test]
    async fn validation_maps_to_400() {
        let (status, msg) =
            status_and_message(ServiceError::Validation("email: invalid email format".into()))
                .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(msg.starts_with("Validation failed"));
    }

    #[tokio::test]
    async fn repository_unique_violation_maps_to_409() {
        let err = ServiceError::Repo(RepositoryError::AlreadyExists(
            "Unique constraint violated: uq_accounts_iban".to_string(),
        ));
        let (status, _) = status_and_message(err).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn client_errors_map_to_500_without_leaking_detail() {
        let err = ServiceError::Client(ClientError::UnexpectedStatus {
            service: "customer-service".to_string(),
            status: 502,
        });
        let (status, msg) = status_and_message(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(msg, "Upstream service error");
    }
}
