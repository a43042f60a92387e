//! Webhook receiver handlers.
//!
//! Deliveries are parsed best-effort, filtered against the trigger's event
//! selection and, when accepted, forwarded to the event sink. The platform
//! always gets a 200 so that filtered deliveries are not retried.

use std::collections::BTreeMap;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use railsr_core::webhook::filter_event;

use crate::http::response::ApiResponse;
use crate::state::ReceiverState;

/// Outcome reported back to the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Accepted,
    Ignored,
}

#[derive(Debug, Serialize)]
pub struct DeliveryAck {
    pub status: DeliveryStatus,
    pub event: Option<String>,
}

/// POST {receiver.path} - Receive a Railsr webhook delivery.
pub async fn receive_event(
    State(state): State<ReceiverState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResponse<DeliveryAck> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    // Parse the body as JSON (best-effort; anything else becomes an empty object)
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(value @ Value::Object(_)) => value,
        _ => Value::Object(serde_json::Map::new()),
    };

    let ack = match filter_event(
        &state.selection,
        &payload,
        header_map(&headers),
        chrono::Utc::now(),
    ) {
        Some(event) => {
            let name = event.event.clone();
            tracing::info!(request_id = %request_id, event = ?name, "delivery accepted");
            if state.sink.send(event).is_err() {
                tracing::warn!(request_id = %request_id, "event sink closed, delivery dropped");
            }
            DeliveryAck {
                status: DeliveryStatus::Accepted,
                event: name,
            }
        }
        None => DeliveryAck {
            status: DeliveryStatus::Ignored,
            event: railsr_core::webhook::filter::event_type(&payload).map(str::to_string),
        },
    };

    ApiResponse::success(ack, request_id, start.elapsed().as_millis() as u64)
}

/// GET /health - Liveness check.
pub async fn health_check() -> ApiResponse<Value> {
    ApiResponse::success(
        serde_json::json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        }),
        Uuid::now_v7().to_string(),
        0,
    )
}

/// Lowercased header names; values that are not valid UTF-8 are skipped.
fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}
