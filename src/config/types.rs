use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfig,
    /// User table for the demo server.
    #[serde(default = "default_users")]
    pub users: Vec<UserRecord>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            client: ClientConfig::default(),
            users: default_users(),
        }
    }
}

/// Settings for the auth server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (host:port). All interfaces by default.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Settings for the auth client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the auth server (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

/// One credential record. Plaintext by design of the toy server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub password: String,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_users() -> Vec<UserRecord> {
    vec![UserRecord {
        email: "test@example.com".to_string(),
        password: "password123".to_string(),
    }]
}
