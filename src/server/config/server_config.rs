use std::path::PathBuf;
use std::time::Duration;

/// Options for the development server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (e.g., "127.0.0.1", "0.0.0.0")
    pub address: String,

    /// Port to listen on (e.g., 4000)
    pub port: u16,

    /// Directory the static files are served from
    pub root: PathBuf,

    /// Time allowed for a single request, TOC generation included
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            address: "127.0.0.1".to_string(),
            port: 4000,
            root: PathBuf::from("."),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration with basic options
    pub fn new(address: &str, port: u16, root: PathBuf) -> Self {
        ServerConfig {
            address: address.to_string(),
            port,
            root,
            ..Default::default()
        }
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Get the full address string (e.g., "127.0.0.1:4000")
    pub fn address_string(&self) -> String {
        if self.address.contains(':') {
            format!("[{}]:{}", self.address, self.port)
        } else {
            format!("{}:{}", self.address, self.port)
        }
    }

    /// Get the full URL (e.g., "http://localhost:4000/")
    pub fn url(&self) -> String {
        let address = if self.address == "127.0.0.1" {
            "localhost".to_string()
        } else if self.address.contains(':') {
            format!("[{}]", self.address)
        } else {
            self.address.clone()
        };

        format!("http://{}:{}/", address, self.port)
    }
}
