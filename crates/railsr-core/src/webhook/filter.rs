//! Inbound delivery filtering and normalization.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use railsr_types::webhook::{EventSelection, NormalizedEvent};

/// Extract the delivery's event type from `event_type`, falling back to `type`.
pub fn event_type(body: &Value) -> Option<&str> {
    ["event_type", "type"]
        .iter()
        .filter_map(|key| body.get(key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
}

/// Decide whether a delivery passes the selection and normalize it.
///
/// Deliveries without an event type are accepted. Returns `None` when the
/// delivery should be acknowledged without emitting anything.
pub fn filter_event(
    selection: &EventSelection,
    body: &Value,
    headers: BTreeMap<String, String>,
    received_at: DateTime<Utc>,
) -> Option<NormalizedEvent> {
    let event = event_type(body);

    if let Some(event) = event {
        if !selection.is_wildcard() && !selection.contains(event) {
            tracing::debug!(event, "delivery filtered out");
            return None;
        }
    }

    let data = match body.get("data") {
        Some(data) if is_truthy(data) => data.clone(),
        _ => body.clone(),
    };

    let timestamp = ["timestamp", "created_at"]
        .iter()
        .filter_map(|key| body.get(key))
        .find(|v| is_truthy(v))
        .cloned()
        .unwrap_or_else(|| {
            Value::String(received_at.to_rfc3339_opts(SecondsFormat::Millis, true))
        });

    let webhook_id = body.get("webhook_id").filter(|v| !v.is_null()).cloned();

    Some(NormalizedEvent {
        event: event.map(str::to_string),
        data,
        timestamp,
        webhook_id,
        headers,
    })
}

/// Loose truthiness: null, false, zero and the empty string count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn received() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn run(selection: &EventSelection, body: Value) -> Option<NormalizedEvent> {
        filter_event(selection, &body, BTreeMap::new(), received())
    }

    #[test]
    fn test_selected_event_is_accepted() {
        let selection = EventSelection::new(["card.created"]);
        let event = run(
            &selection,
            json!({"event_type": "card.created", "data": {"card_id": "c1"}}),
        )
        .unwrap();
        assert_eq!(event.event.as_deref(), Some("card.created"));
        assert_eq!(event.data, json!({"card_id": "c1"}));
    }

    #[test]
    fn test_unselected_event_is_dropped() {
        let selection = EventSelection::new(["card.created"]);
        assert!(run(&selection, json!({"event_type": "card.blocked"})).is_none());
    }

    #[test]
    fn test_wildcard_accepts_anything() {
        let selection = EventSelection::all();
        let event = run(&selection, json!({"type": "payout.failed"})).unwrap();
        assert_eq!(event.event.as_deref(), Some("payout.failed"));
    }

    #[test]
    fn test_missing_event_type_is_accepted() {
        let selection = EventSelection::new(["card.created"]);
        let event = run(&selection, json!({"foo": 1})).unwrap();
        assert!(event.event.is_none());
        assert_eq!(event.data, json!({"foo": 1}));
    }

    #[test]
    fn test_event_type_preferred_over_type() {
        let body = json!({"event_type": "kyc.approved", "type": "kyc.failed"});
        assert_eq!(event_type(&body), Some("kyc.approved"));
        let body = json!({"event_type": "", "type": "kyc.failed"});
        assert_eq!(event_type(&body), Some("kyc.failed"));
    }

    #[test]
    fn test_timestamp_fallbacks() {
        let selection = EventSelection::all();

        let explicit = run(&selection, json!({"timestamp": "t1", "created_at": "t2"})).unwrap();
        assert_eq!(explicit.timestamp, json!("t1"));

        let created = run(&selection, json!({"created_at": "t2"})).unwrap();
        assert_eq!(created.timestamp, json!("t2"));

        let fallback = run(&selection, json!({})).unwrap();
        assert_eq!(fallback.timestamp, json!("2024-05-01T12:00:00.000Z"));
    }

    #[test]
    fn test_webhook_id_and_headers_pass_through() {
        let selection = EventSelection::all();
        let mut headers = BTreeMap::new();
        headers.insert("x-railsr-signature".to_string(), "sig".to_string());
        let event = filter_event(
            &selection,
            &json!({"webhook_id": "wh_9", "data": null}),
            headers,
            received(),
        )
        .unwrap();
        assert_eq!(event.webhook_id, Some(json!("wh_9")));
        assert_eq!(event.headers["x-railsr-signature"], "sig");
        // null data falls back to the whole payload
        assert_eq!(event.data["webhook_id"], "wh_9");
    }
}
