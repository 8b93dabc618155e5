//! Live server harness for end-to-end tests
//!
//! Binds an ephemeral port on loopback, serves the real router on a
//! background task and shuts it down gracefully on drop.

use anyhow::{Context, Result};
use pipecheck_lib::application::AppConfig;
use pipecheck_lib::server::serve_with_listener;
use reqwest::Client;
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A running pipecheck server bound to 127.0.0.1:<ephemeral>
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<Result<(), pipecheck_lib::ServerError>>>,
}

impl TestServer {
    /// Start with default configuration
    pub async fn start() -> Result<Self> {
        Self::start_with(AppConfig::default()).await
    }

    /// Start with the given configuration; host and port are overridden
    pub async fn start_with(mut config: AppConfig) -> Result<Self> {
        config.host = "127.0.0.1".to_string();
        config.port = 0;
        config.validate()?;

        let listener = TcpListener::bind((config.host.as_str(), config.port))
            .await
            .context("Failed to bind test listener")?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            serve_with_listener(listener, &config, async {
                let _ = shutdown_rx.await;
            })
            .await
        });

        Ok(Self {
            addr,
            client: Client::new(),
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Absolute URL for a path on this server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body to /pipelines/parse
    pub async fn parse<T: Serialize + ?Sized>(&self, body: &T) -> Result<reqwest::Response> {
        self.client
            .post(self.url("/pipelines/parse"))
            .json(body)
            .send()
            .await
            .context("Request to /pipelines/parse failed")
    }

    /// Stop the server and wait for it to finish
    pub async fn stop(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.await.context("Server task panicked")??;
        }
        Ok(())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
