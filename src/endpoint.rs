//! Resolution of the API base origin.

use std::fmt;

/// Environment variable holding the API host (scheme included).
pub const HOST_ENV: &str = "API_HOST";

/// Environment variable holding the API port.
pub const PORT_ENV: &str = "API_PORT";

/// Host used when none is configured.
pub const DEFAULT_HOST: &str = "http://localhost";

/// Port used when none is configured.
pub const DEFAULT_PORT: &str = "8080";

/// Where the file storage API lives.
///
/// Built once at startup and handed to [`StorageClient`](crate::StorageClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: String,
}

impl Endpoint {
    /// Resolve an endpoint from optional host and port values.
    ///
    /// Missing or blank values fall back to [`DEFAULT_HOST`] and
    /// [`DEFAULT_PORT`]. Resolution never fails.
    pub fn resolve(host: Option<&str>, port: Option<&str>) -> Self {
        let endpoint = Self {
            host: non_blank(host).unwrap_or(DEFAULT_HOST).to_string(),
            port: non_blank(port).unwrap_or(DEFAULT_PORT).to_string(),
        };
        tracing::info!(origin = %endpoint, "Targeting API at \"{}\"", endpoint);
        endpoint
    }

    /// Resolve an endpoint from `API_HOST` and `API_PORT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve an endpoint through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_ENV);
        let port = lookup(PORT_ENV);
        Self::resolve(host.as_deref(), port.as_deref())
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// The base origin every API path is appended to, as `host:port`.
    pub fn origin(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let endpoint = Endpoint::resolve(None, None);
        assert_eq!(endpoint.origin(), "http://localhost:8080");
    }

    #[test]
    fn test_overrides() {
        let endpoint = Endpoint::resolve(Some("h"), Some("9"));
        assert_eq!(endpoint.origin(), "h:9");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let endpoint = Endpoint::resolve(Some("  "), Some(""));
        assert_eq!(endpoint.host(), DEFAULT_HOST);
        assert_eq!(endpoint.port(), DEFAULT_PORT);
    }

    #[test]
    fn test_partial_override() {
        let endpoint = Endpoint::resolve(None, Some("3000"));
        assert_eq!(endpoint.origin(), "http://localhost:3000");
    }

    #[test]
    fn test_from_lookup() {
        let endpoint = Endpoint::from_lookup(|key| match key {
            HOST_ENV => Some("https://files.internal".to_string()),
            _ => None,
        });
        assert_eq!(endpoint.origin(), "https://files.internal:8080");
        assert_eq!(endpoint.to_string(), endpoint.origin());
    }
}
