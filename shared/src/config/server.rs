//! Server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Allowed CORS origin for the web frontend
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0,
            cors_origin: String::from("http://localhost:3000"),
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8080);
        let workers = std::env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let cors_origin = std::env::var("CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self {
            host,
            port,
            workers,
            cors_origin,
        }
    }

    /// The address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Resolve the worker count, mapping the 0 sentinel to the number of
    /// available CPU cores
    ///
    /// Always returns at least 1; the HTTP server rejects a zero worker
    /// count.
    pub fn worker_count(&self) -> usize {
        if self.workers > 0 {
            self.workers
        } else {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_default_cors_origin_is_localhost() {
        let config = ServerConfig::default();
        assert_eq!(config.cors_origin, "http://localhost:3000");
    }

    #[test]
    fn test_worker_count_never_resolves_to_zero() {
        let config = ServerConfig::default();
        assert_eq!(config.workers, 0);
        assert!(config.worker_count() >= 1);
    }

    #[test]
    fn test_explicit_worker_count_wins() {
        let config = ServerConfig {
            workers: 4,
            ..Default::default()
        };
        assert_eq!(config.worker_count(), 4);
    }
}
