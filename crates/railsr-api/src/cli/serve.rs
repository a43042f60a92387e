//! `serve` command: run the webhook receiver.
//!
//! Accepted events are written to stdout as JSON lines; banners and logs go
//! to stderr.

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use console::style;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use railsr_core::client::ApiClient;
use railsr_core::storage::node_state::NodeStateStore;
use railsr_core::webhook::WebhookLifecycle;
use railsr_types::webhook::{EventSelection, NormalizedEvent};

use crate::cli::trigger::{TriggerTarget, build_lifecycle};
use crate::http::router::build_router;
use crate::state::{AppState, ReceiverState};

pub struct ServeOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub register: bool,
    pub target: TriggerTarget,
    pub quiet: bool,
}

/// Start the receiver and block until Ctrl+C or SIGTERM.
pub async fn serve(state: &AppState, opts: ServeOptions) -> Result<()> {
    let receiver = &state.config.receiver;
    let host = opts.host.unwrap_or_else(|| receiver.host.clone());
    let port = opts.port.unwrap_or(receiver.port);
    let selection = state.selection(opts.target.events.clone());

    // Bind before registering: nothing is created remotely for a receiver
    // that cannot start.
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    let lifecycle = if opts.register {
        Some(build_lifecycle(state, opts.target)?)
    } else {
        None
    };

    run_receiver(
        listener,
        selection,
        &receiver.path,
        lifecycle,
        shutdown_signal(),
        opts.quiet,
    )
    .await
}

/// Serve deliveries on `listener` until `shutdown` resolves.
///
/// With a lifecycle, the subscription is activated first and removed once
/// serving stops, whether or not serving succeeded.
pub(crate) async fn run_receiver<C, S, F>(
    listener: TcpListener,
    selection: EventSelection,
    path: &str,
    lifecycle: Option<WebhookLifecycle<C, S>>,
    shutdown: F,
    quiet: bool,
) -> Result<()>
where
    C: ApiClient,
    S: NodeStateStore,
    F: Future<Output = ()> + Send + 'static,
{
    if let Some(lifecycle) = &lifecycle {
        let remote_id = lifecycle
            .activate()
            .await
            .context("failed to register the Railsr webhook")?;
        if !quiet {
            eprintln!(
                "  {} Webhook {} registered for {}",
                style("ok").green(),
                style(&remote_id).yellow(),
                style(lifecycle.callback_url()).cyan()
            );
        }
    }

    let (tx, rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(print_events(rx));

    let router = build_router(
        ReceiverState {
            selection: Arc::new(selection),
            sink: tx,
        },
        path,
    );

    if !quiet {
        let local = listener
            .local_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "?".to_string());
        eprintln!(
            "  {} Railsr receiver listening on {}",
            style("⚡").bold(),
            style(format!("http://{local}{path}")).cyan()
        );
        eprintln!("  {}", style("Press Ctrl+C to stop").dim());
    }

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await;

    if let Some(lifecycle) = lifecycle {
        if let Err(e) = lifecycle.deactivate().await {
            tracing::warn!(error = %e, "failed to clear webhook registration");
        } else if !quiet {
            eprintln!("  {} Webhook removed", style("ok").green());
        }
    }

    // The router (and with it the sender) is gone; drain remaining events.
    printer.await?;
    served?;

    if !quiet {
        eprintln!("\n  Receiver stopped.");
    }
    Ok(())
}

async fn print_events(mut rx: mpsc::UnboundedReceiver<NormalizedEvent>) {
    while let Some(event) = rx.recv().await {
        match serde_json::to_string(&event) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::error!(error = %e, "failed to encode event"),
        }
    }
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use serde_json::{Value, json};
    use tokio::sync::oneshot;

    use railsr_infra::state::InMemoryNodeStateStore;
    use railsr_types::error::AdapterError;
    use railsr_types::request::ApiRequest;
    use railsr_types::resource::HttpMethod;
    use railsr_types::webhook::{TriggerNodeId, WEBHOOK_ID_KEY};

    const CALLBACK: &str = "https://hooks.example.com/webhook";

    /// Records every call; creation can be made to fail.
    #[derive(Default)]
    struct RecordingClient {
        calls: Mutex<Vec<(HttpMethod, String)>>,
        fail_create: bool,
    }

    impl RecordingClient {
        fn calls(&self) -> Vec<(HttpMethod, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ApiClient for RecordingClient {
        async fn send(&self, request: &ApiRequest) -> Result<Value, AdapterError> {
            self.calls
                .lock()
                .unwrap()
                .push((request.method, request.path.clone()));
            match (request.method, request.path.as_str()) {
                (HttpMethod::Get, "/webhooks") => Ok(json!([])),
                (HttpMethod::Post, "/webhooks") if self.fail_create => {
                    Err(AdapterError::upstream(Some(422), "invalid url"))
                }
                (HttpMethod::Post, "/webhooks") => Ok(json!({"id": "wh_1"})),
                (HttpMethod::Delete, _) => Ok(Value::Null),
                other => panic!("unexpected call {other:?}"),
            }
        }
    }

    fn lifecycle(
        client: RecordingClient,
    ) -> (
        WebhookLifecycle<RecordingClient, InMemoryNodeStateStore>,
        Arc<RecordingClient>,
        Arc<InMemoryNodeStateStore>,
    ) {
        let client = Arc::new(client);
        let store = Arc::new(InMemoryNodeStateStore::new());
        let lc = WebhookLifecycle::new(
            client.clone(),
            store.clone(),
            TriggerNodeId::new("serve-test"),
            CALLBACK,
            EventSelection::all(),
        );
        (lc, client, store)
    }

    async fn local_listener() -> TcpListener {
        TcpListener::bind("127.0.0.1:0").await.unwrap()
    }

    #[tokio::test]
    async fn test_registration_is_removed_after_shutdown() {
        let (lc, client, store) = lifecycle(RecordingClient::default());

        run_receiver(
            local_listener().await,
            EventSelection::all(),
            "/webhook",
            Some(lc),
            std::future::ready(()),
            true,
        )
        .await
        .unwrap();

        assert_eq!(
            client.calls(),
            vec![
                (HttpMethod::Get, "/webhooks".to_string()),
                (HttpMethod::Post, "/webhooks".to_string()),
                (HttpMethod::Delete, "/webhooks/wh_1".to_string()),
            ]
        );
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_registration_failure_serves_nothing() {
        let (lc, client, store) = lifecycle(RecordingClient {
            fail_create: true,
            ..Default::default()
        });

        let err = run_receiver(
            local_listener().await,
            EventSelection::all(),
            "/webhook",
            Some(lc),
            std::future::ready(()),
            true,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("register"));
        assert!(!client.calls().iter().any(|(m, _)| *m == HttpMethod::Delete));
        let node = TriggerNodeId::new("serve-test");
        assert_eq!(store.get(&node, WEBHOOK_ID_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_deliveries_are_served_until_shutdown() {
        let (lc, client, store) = lifecycle(RecordingClient::default());
        let listener = local_listener().await;
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = oneshot::channel::<()>();

        let server = tokio::spawn(run_receiver(
            listener,
            EventSelection::new(["card.created"]),
            "/webhook",
            Some(lc),
            async {
                let _ = stop_rx.await;
            },
            true,
        ));

        let http = reqwest::Client::new();
        let body: Value = http
            .post(format!("http://{addr}/webhook"))
            .json(&json!({"event_type": "card.blocked"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["data"]["status"], "ignored");

        // Registered while serving
        let node = TriggerNodeId::new("serve-test");
        assert_eq!(
            store.get(&node, WEBHOOK_ID_KEY).await.unwrap().as_deref(),
            Some("wh_1")
        );

        stop_tx.send(()).unwrap();
        server.await.unwrap().unwrap();

        assert!(store.is_empty());
        assert_eq!(
            client.calls().last(),
            Some(&(HttpMethod::Delete, "/webhooks/wh_1".to_string()))
        );
    }
}
