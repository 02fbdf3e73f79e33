use crate::assessment::AnswerPolicy;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Deployment the assessment runs in, read from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Settings shared by `serve`, `take` and `score`; CLI flags override them after loading.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assessment: AssessmentConfig,
}

impl AppConfig {
    /// Reads `.env` if present, then the `APP_*` and `ASSESSMENT_*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&var_or("APP_ENV", "development"));
        let host = var_or("APP_HOST", "127.0.0.1");
        let raw_port = var_or("APP_PORT", "3000");
        let port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw_port.clone()))?;
        let log_level = var_or("APP_LOG_LEVEL", "info");

        let answer_policy = match env::var("ASSESSMENT_ANSWER_POLICY") {
            Ok(raw) => AnswerPolicy::parse(&raw).ok_or(ConfigError::InvalidAnswerPolicy(raw))?,
            Err(_) => AnswerPolicy::default(),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            assessment: AssessmentConfig { answer_policy },
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Bind address of the scoring API.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `localhost` maps to the IPv4 loopback; anything else must be a literal IP.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// How submitted answers are checked against a question's options.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssessmentConfig {
    pub answer_policy: AnswerPolicy,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidHost { source: std::net::AddrParseError },
    InvalidAnswerPolicy(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => {
                write!(f, "APP_PORT must be a port number (0-65535), got '{}'", value)
            }
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidAnswerPolicy(value) => write!(
                f,
                "ASSESSMENT_ANSWER_POLICY must be 'strict' or 'lenient', got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort(_) | ConfigError::InvalidAnswerPolicy(_) => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
