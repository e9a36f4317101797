//! Backend subcommand handlers: ask, window, health.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use carquery_core::Session;
use carquery_protocols::{Backend, Query, RelayRequest};
use carquery_relay::SessionWindowHost;

use crate::cli::{QueryArgs, SelectionArgs};
use crate::cmd_query::render_text;
use crate::context::Context;

/// Build the query, send it, and render the response.
///
/// The session's submit latch is released and its view updated on every
/// outcome.
pub(crate) async fn handle_ask(
    ctx: &Context,
    session: &mut Session,
    selection: &SelectionArgs,
    query: &QueryArgs,
    via_relay: bool,
    expand: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    session.apply(&selection.to_selection())?;
    let query = session.query(&ctx.query_builder(query))?;
    println!("Query: {}", query);

    let request = async {
        if via_relay {
            fetch_via_relay(ctx, &query).await
        } else {
            fetch_direct(ctx, &query).await
        }
    };
    let rendered = session
        .submit(&ctx.config.display.highlight_key, request)
        .await?;
    println!();
    print!(
        "{}",
        render_text(rendered, expand || ctx.config.display.expand_remainder)
    );
    Ok(())
}

async fn fetch_direct(ctx: &Context, query: &Query) -> Result<Value, String> {
    let backend = ctx.http_backend().map_err(|e| e.to_string())?;
    backend.send(query.as_str()).await.map_err(|e| e.to_string())
}

async fn fetch_via_relay(ctx: &Context, query: &Query) -> Result<Value, String> {
    let handle = ctx
        .spawn_relay(Arc::new(SessionWindowHost::new()))
        .map_err(|e| e.to_string())?;
    let response = handle
        .send(RelayRequest::fetch(query.as_str()))
        .await
        .map_err(|e| e.to_string())?;

    if response.success {
        Ok(response.data.unwrap_or(Value::Null))
    } else {
        Err(response
            .error
            .unwrap_or_else(|| "Relay reported failure".to_string()))
    }
}

/// Ask the relay for a persistent window and report it.
pub(crate) async fn handle_window(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let host = Arc::new(SessionWindowHost::new());
    let handle = ctx.spawn_relay(host.clone())?;
    let response = handle.send(RelayRequest::OpenPersistentWindow).await?;

    let id = match response.window_id {
        Some(id) if response.success => id,
        _ => {
            let message = response
                .error
                .unwrap_or_else(|| "Relay reported failure".to_string());
            return Err(message.into());
        }
    };

    if let Some(window) = host.get(id) {
        info!("Window {} opened at {}", id, window.opened_at);
        println!(
            "Opened window {}: {} ({}x{})",
            id, window.spec.url, window.spec.width, window.spec.height
        );
    }
    Ok(())
}

/// `GET /health` on the backend origin.
pub(crate) async fn handle_health(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let backend = ctx.http_backend()?;
    let status = backend.health().await?;
    if !status.is_healthy() {
        return Err(format!("Backend reported status '{}'", status.status).into());
    }
    println!("Backend at {} is {}", backend.endpoint(), status.status);
    Ok(())
}
