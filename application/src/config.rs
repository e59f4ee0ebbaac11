//! [`Config`]-related definitions.

use std::time;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use http::header::{HeaderValue, InvalidHeaderValue};
use serde::Deserialize;
use smart_default::SmartDefault;
use tower_http::cors::AllowOrigin;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Launch catalog configuration.
    pub catalog: Catalog,

    /// Postgres configuration.
    pub postgres: Postgres,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

impl Cors {
    /// Parses these [`Cors::origins`].
    ///
    /// [`None`] is returned if any origin is allowed (`*` is listed).
    ///
    /// # Errors
    ///
    /// Errors if any of the origins is not a valid HTTP header value.
    pub fn parse_origins(
        &self,
    ) -> Result<Option<Vec<HeaderValue>>, InvalidHeaderValue> {
        if self.origins.iter().any(|o| o == "*") {
            return Ok(None);
        }
        self.origins
            .iter()
            .map(|o| o.parse())
            .collect::<Result<_, _>>()
            .map(Some)
    }

    /// Builds the [`AllowOrigin`] policy allowing all these
    /// [`Cors::origins`].
    ///
    /// # Errors
    ///
    /// Errors if any of the origins is not a valid HTTP header value.
    pub fn allow_origin(&self) -> Result<AllowOrigin, InvalidHeaderValue> {
        Ok(self
            .parse_origins()?
            .map_or_else(AllowOrigin::any, AllowOrigin::list))
    }
}

/// Launch catalog configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Catalog {
    /// Base URL of the SpaceX API.
    #[default("https://api.spacexdata.com/v2".to_owned())]
    pub base_url: String,

    /// Timeout of a single request to the SpaceX API.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl From<Catalog> for service::infra::spacex::Config {
    fn from(value: Catalog) -> Self {
        let Catalog { base_url, timeout } = value;
        Self { base_url, timeout }
    }
}

/// Postgres configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Postgres {
    /// Host to connect to.
    #[default("127.0.0.1".to_owned())]
    pub host: String,

    /// Port to connect to.
    #[default(5432)]
    pub port: u16,

    /// User to connect as.
    #[default("postgres".to_owned())]
    pub user: String,

    /// Password to connect with.
    #[default("postgres".to_owned())]
    pub password: String,

    /// Database name to connect to.
    #[default("postgres".to_owned())]
    pub dbname: String,
}

impl From<Postgres> for service::infra::postgres::Config {
    fn from(value: Postgres) -> Self {
        let Postgres {
            host,
            port,
            user,
            password,
            dbname,
        } = value;

        Self {
            host: Some(host),
            port: Some(port),
            user: Some(user),
            password: Some(password),
            dbname: Some(dbname),
            ..Self::default()
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time;

    use super::{Config, Cors, LogLevel};

    #[test]
    fn falls_back_to_defaults() {
        let conf = Config::new("non-existent.toml").unwrap();

        assert_eq!(conf.server.port, 8080);
        assert_eq!(conf.server.cors.origins, ["*"]);
        assert_eq!(conf.catalog.base_url, "https://api.spacexdata.com/v2");
        assert_eq!(conf.catalog.timeout, time::Duration::from_secs(10));
        assert_eq!(conf.postgres.port, 5432);
        assert!(matches!(conf.log.level, LogLevel::Info));
    }

    #[test]
    fn allows_every_listed_cors_origin() {
        let cors = Cors {
            origins: vec![
                "https://a.example.com".to_owned(),
                "https://b.example.com".to_owned(),
            ],
        };

        assert_eq!(
            cors.parse_origins().unwrap().unwrap(),
            ["https://a.example.com", "https://b.example.com"],
        );
        assert!(cors.allow_origin().is_ok());
    }

    #[test]
    fn allows_any_cors_origin_on_wildcard() {
        let cors = Cors {
            origins: vec!["https://a.example.com".to_owned(), "*".to_owned()],
        };

        assert_eq!(cors.parse_origins().unwrap(), None);
        assert!(cors.allow_origin().is_ok());
    }

    #[test]
    fn rejects_invalid_cors_origin() {
        let cors = Cors {
            origins: vec!["https://a.example.com\n".to_owned()],
        };

        assert!(cors.parse_origins().is_err());
        assert!(cors.allow_origin().is_err());
    }
}
