//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_backend;

use std::net::SocketAddr;

use loginflow::config::UserRecord;
use loginflow::server::store::UserStore;
use loginflow::server::{AuthServer, ServerHandle};
use tokio::task::JoinHandle;

/// The user table every integration test runs against.
pub fn test_users() -> Vec<UserRecord> {
    vec![UserRecord {
        email: "test@example.com".to_string(),
        password: "password123".to_string(),
    }]
}

/// Start a real auth server on an ephemeral port.
///
/// Returns the bound address, a shutdown handle, and the serve task.
pub async fn spawn_server() -> (SocketAddr, ServerHandle, JoinHandle<()>) {
    let mut server = AuthServer::new(UserStore::new(test_users()));
    let addr = server
        .try_bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let handle = server.handle();

    let task = tokio::spawn(async move {
        server.run().await.expect("Test server failed");
    });

    (addr, handle, task)
}

/// An address nothing is listening on, for connection-failure tests.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
