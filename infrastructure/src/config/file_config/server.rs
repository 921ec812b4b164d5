//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Raw HTTP server configuration from TOML
///
/// # Example
///
/// ```toml
/// [server]
/// host = "127.0.0.1"
/// port = 8000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl FileServerConfig {
    /// `host:port`, suitable for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
