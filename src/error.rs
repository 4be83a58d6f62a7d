// Error types shared across layers
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum HubError {
    /// A selection outside the navigation set. Only reachable from raw input
    /// such as a URL path.
    #[error("unknown page: {0}")]
    UnknownPage(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid bind address {addr}: {source}")]
    BindAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

impl IntoResponse for HubError {
    fn into_response(self) -> Response {
        let status = match &self {
            HubError::UnknownPage(_) => StatusCode::NOT_FOUND,
            HubError::Config(_) | HubError::BindAddress { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }

        (status, self.to_string()).into_response()
    }
}
