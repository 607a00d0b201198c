use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub enable_cors: bool,
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 10,
            enable_cors: false,
            cors_origin: "http://localhost:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            filter: "info,hyper=warn,tower_http=info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

impl Config {
    /// Built-in defaults, then `config/default.toml`, then `HEE__*` env vars.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self::figment(DEFAULT_CONFIG_PATH).extract()?)
    }

    pub fn figment(path: &str) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("HEE__").split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|_jail| {
            let cfg: Config = Config::figment("missing.toml").extract()?;
            assert_eq!(cfg.server.port, 8080);
            assert_eq!(cfg.server.host, "127.0.0.1");
            assert!(!cfg.server.enable_cors);
            assert_eq!(cfg.logging.format, LogFormat::Json);
            Ok(())
        });
    }

    #[test]
    fn test_file_and_env_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "hee.toml",
                r#"
                [server]
                host = "0.0.0.0"
                port = 9000
                "#,
            )?;
            jail.set_env("HEE__SERVER__PORT", "9100");
            jail.set_env("HEE__LOGGING__FORMAT", "pretty");

            let cfg: Config = Config::figment("hee.toml").extract()?;
            assert_eq!(cfg.server.host, "0.0.0.0");
            assert_eq!(cfg.server.port, 9100);
            assert_eq!(cfg.server.request_timeout_secs, 10);
            assert_eq!(cfg.logging.format, LogFormat::Pretty);
            Ok(())
        });
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig::default();
        assert_eq!(server.socket_addr().unwrap().port(), 8080);
    }
}
