/// Origins the backend trusts when a separate frontend dev server calls it.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost:3000", "http://localhost:80"];

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_origins: default_origins(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("HOST")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.host);

        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw).unwrap_or_else(|| {
                tracing::warn!("Invalid PORT value {raw:?}, using default {}", defaults.port);
                defaults.port
            }),
            Err(_) => defaults.port,
        };

        let cors_origins = match std::env::var("CORS_ORIGINS") {
            Ok(raw) => parse_origins(&raw),
            Err(_) => defaults.cors_origins,
        };

        Self {
            host,
            port,
            cors_origins,
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_origins() -> Vec<String> {
    DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
}

fn parse_port(raw: &str) -> Option<u16> {
    raw.trim().parse().ok()
}

/// Comma-separated origin list; blank entries are dropped. An effectively
/// empty value keeps the defaults rather than disabling CORS entirely.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        default_origins()
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "http://localhost:80"]
        );
    }

    #[test]
    fn parse_port_accepts_valid_numbers() {
        assert_eq!(parse_port("8081"), Some(8081));
        assert_eq!(parse_port(" 9090 "), Some(9090));
    }

    #[test]
    fn parse_port_rejects_junk() {
        assert_eq!(parse_port("not-a-port"), None);
        assert_eq!(parse_port("99999"), None);
        assert_eq!(parse_port(""), None);
    }

    #[test]
    fn parse_origins_splits_and_trims() {
        assert_eq!(
            parse_origins("http://a.example, http://b.example ,,"),
            vec!["http://a.example", "http://b.example"]
        );
    }

    #[test]
    fn parse_origins_falls_back_to_defaults_when_empty() {
        assert_eq!(parse_origins(" , ,"), default_origins());
        assert_eq!(parse_origins(""), default_origins());
    }
}
