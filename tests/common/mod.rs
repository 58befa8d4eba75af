//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use user_service::{HttpServer, ServiceConfig, Shutdown, UserStore};

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: Arc<UserStore>,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestServer {
    /// Boot a server with the default config on 127.0.0.1:0.
    pub async fn start() -> Self {
        Self::start_with(ServiceConfig::default()).await
    }

    /// Boot a server with the given config, ignoring its bind address.
    pub async fn start_with(config: ServiceConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let shutdown = Shutdown::new();
        let server = HttpServer::new(config);
        let store = server.store();
        let server_shutdown = shutdown.subscribe();

        tokio::spawn(async move {
            let _ = server.run(listener, server_shutdown).await;
        });

        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap();

        Self {
            addr,
            store,
            client,
            shutdown,
        }
    }

    /// Absolute URL for a path on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}
