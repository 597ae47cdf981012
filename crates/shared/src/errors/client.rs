use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {service}")]
    UnexpectedStatus { service: String, status: u16 },

    #[error("Invalid response body from {service}: {message}")]
    InvalidBody { service: String, message: String },
}
