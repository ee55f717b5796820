use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use circ_chain::{Block, ChainError, SharedChain};
use circ_types::{Book, CheckoutRecord};
use serde::Serialize;
use serde_json::json;

use crate::catalog;
use crate::error::ServerResult;

/// `GET /`: the full ordered block sequence.
pub async fn list_blocks(
    State(chain): State<Arc<SharedChain>>,
) -> ServerResult<Json<Vec<Block>>> {
    Ok(Json(chain.snapshot()?))
}

/// `POST /`: record a checkout event as a new block.
pub async fn record_checkout(
    State(chain): State<Arc<SharedChain>>,
    Json(record): Json<CheckoutRecord>,
) -> ServerResult<(StatusCode, Json<Block>)> {
    let block = chain.append(record)?;
    tracing::info!(
        position = block.position,
        hash = %block.hash.short_hex(),
        "checkout recorded"
    );
    Ok((StatusCode::CREATED, Json(block)))
}

/// `POST /new`: register a book and derive its catalog ID.
pub async fn register_book(Json(mut book): Json<Book>) -> Json<Book> {
    catalog::assign_id(&mut book);
    tracing::info!(id = %book.id, title = %book.title, "book registered");
    Json(book)
}

/// Integrity report for the verify endpoint.
#[derive(Serialize)]
pub struct VerifyResponse {
    pub ok: bool,
    pub blocks: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `GET /verify`: recompute every commitment and report the outcome.
pub async fn verify_chain(
    State(chain): State<Arc<SharedChain>>,
) -> ServerResult<Json<VerifyResponse>> {
    let report = match chain.verify() {
        Ok(blocks) => VerifyResponse {
            ok: true,
            blocks,
            error: None,
        },
        Err(err @ ChainError::LockPoisoned) => return Err(err.into()),
        Err(err) => VerifyResponse {
            ok: false,
            blocks: chain.len()?,
            error: Some(err.to_string()),
        },
    };
    Ok(Json(report))
}

/// `GET /health`: liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
