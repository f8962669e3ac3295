//! Transport startup: stdio by default, streamable HTTP when a port is configured.

use anyhow::{Context, Result};
use rmcp::ServiceExt;
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};

use super::MenuServer;
use crate::strings::logs;

/// Serve on stdin/stdout until the client disconnects.
pub async fn serve_stdio(server: MenuServer) -> Result<()> {
    tracing::info!("{}", logs::STDIO_TRANSPORT);

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server over stdio")?;
    service
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;
    Ok(())
}

/// Serve streamable HTTP at `/mcp` until Ctrl-C.
pub async fn serve_http(server: MenuServer, host: &str, port: u16) -> Result<()> {
    let addr = format!("{host}:{port}");

    // One MenuServer clone per session; they share the same MenuService.
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("{}", logs::http_transport(&addr));

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("{}", logs::shutdown_fail(&e.to_string()));
            }
        })
        .await
        .context("HTTP transport failed")?;
    Ok(())
}
