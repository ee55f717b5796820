use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use circ_chain::ChainError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// Map the error kind onto a status: stale-head rejections are client
    /// conflicts, a second genesis is unprocessable, anything else is ours.
    fn status(&self) -> StatusCode {
        match self {
            Self::Chain(ChainError::BrokenLink { .. })
            | Self::Chain(ChainError::SequenceGap { .. }) => StatusCode::CONFLICT,
            Self::Chain(ChainError::MalformedGenesis { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_rejection_maps_to_422() {
        let err = ServerError::Chain(ChainError::MalformedGenesis {
            reason: "chain already has a genesis block".into(),
        });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn sequence_gap_maps_to_409() {
        let err = ServerError::Chain(ChainError::SequenceGap {
            expected: 2,
            found: 5,
        });
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn integrity_failure_maps_to_500() {
        let err = ServerError::Chain(ChainError::HashMismatch { position: 3 });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
