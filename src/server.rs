use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::Path,
};

use anyhow::Context;
use axum::{middleware, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    decompression::RequestDecompressionLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

use crate::{
    error::ErrorVerbosity,
    middleware::{
        method_not_allowed::method_not_allowed, not_found::not_found,
        trace_headers::trace_headers, trace_response_body::trace_response_body,
    },
    route::books,
    state::ApiState,
    store::StorageConfig,
};

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_socket_address")]
    socket_address: SocketAddr,
    #[serde(default)]
    error_verbosity: ErrorVerbosity,
    #[serde(default)]
    storage: StorageConfig,
}

fn default_socket_address() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 3000)
}

impl ServerConfig {
    pub fn new(
        socket_address: SocketAddr,
        error_verbosity: ErrorVerbosity,
        storage: StorageConfig,
    ) -> Self {
        Self {
            socket_address,
            error_verbosity,
            storage,
        }
    }

    /// Reads the configuration from a YAML file.
    pub async fn from_config_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file `{}`", path.display()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config file `{}`", path.display()))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn with_socket_address(mut self, socket_address: SocketAddr) -> Self {
        self.socket_address = socket_address;
        self
    }

    pub fn socket_address(&self) -> SocketAddr {
        self.socket_address
    }

    pub fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }

    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }
}

/// Builds the application router on top of the given state.
pub fn router(state: ApiState) -> Router {
    Router::<ApiState>::new()
        .merge(books::app::app())
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            method_not_allowed::<ApiState>,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            trace_response_body,
        ))
        .layer(middleware::from_fn(trace_headers))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                        .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                        .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
                )
                .layer(RequestDecompressionLayer::new())
                .layer(CompressionLayer::new()),
        )
}

pub struct Server {
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let store = self
            .config
            .storage
            .open()
            .await
            .context("Failed to open book store")?;

        let state = ApiState::new(self.config.error_verbosity, store);
        let app = router(state);

        tracing::info!(addr = %self.config.socket_address, "Starting server");

        let listener = TcpListener::bind(&self.config.socket_address)
            .await
            .context("Bind failed")?;

        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server failed")?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "Failed to listen for CTRL+C");
            return std::future::pending::<()>().await;
        }

        tracing::info!("CTRL+C received");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;

                tracing::info!("SIGTERM received");
            }
            Err(err) => {
                tracing::error!(%err, "Failed to install SIGTERM signal handler");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
