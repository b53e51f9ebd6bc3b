//! # REST Pipeline Sample
//!
//! Wires the sample [`Application`] and serves a handful of requests through it,
//! logging each response. Run with `RUST_LOG=debug` to see every stage.

use rest_pipeline::tracing::setup_tracing;
use rest_sample::lifecycle::Application;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting sample application");

    let app = Application::new().map_err(|e| {
        error!(error = %e, "Wiring failed");
        e.to_string()
    })?;

    let requests = [
        ("GET", "/greeting"),
        ("GET", "/health"),
        ("GET", "/items"),
        ("GET", "/items/2"),
        ("DELETE", "/items/2"),
        ("GET", "/items/2"),
        ("GET", "/items/abc"),
        ("POST", "/greeting"),
    ];

    for (method, path) in requests {
        let span = tracing::info_span!("request", method, path);
        let response = app.handle(method, path).instrument(span).await;
        info!(
            method,
            path,
            status = response.status,
            content_type = response.content_type.as_deref().unwrap_or("-"),
            body = %response.body_text(),
            "Response"
        );
    }

    info!("Application completed successfully");
    Ok(())
}
