use std::env;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> Self {
        let ip = env::var("SERVICE_IP").unwrap_or_else(|_| DEFAULT_IP.to_string());
        let port = parse_port(env::var("SERVICE_PORT").ok().as_deref());

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    match raw.map(str::parse::<u16>) {
        Some(Ok(port)) => port,
        Some(Err(_)) => {
            tracing::warn!("SERVICE_PORT is not a valid port, using {}", DEFAULT_PORT);
            DEFAULT_PORT
        }
        None => DEFAULT_PORT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        let config = ServerConfig {
            ip: "0.0.0.0".to_string(),
            port: 3000,
        };

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn should_fall_back_to_default_port() {
        assert_eq!(parse_port(None), DEFAULT_PORT);
        assert_eq!(parse_port(Some("http")), DEFAULT_PORT);
        assert_eq!(parse_port(Some("9090")), 9090);
    }
}
