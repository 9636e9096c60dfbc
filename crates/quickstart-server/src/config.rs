//! Server configuration.
//!
//! Values come from a TOML file (or built-in defaults), then environment
//! variables, then CLI flags, each layer overriding the previous one. The
//! file and the environment are merged by the `config` crate and the result
//! is deserialized into [`Config`].

use crate::logging::LogLevel;
use anyhow::{bail, Context, Result};
use ::config::{Environment, File, FileFormat};
use quickstart_core::authorizer::{TokenRule, CONNECT_ROUTE, DEFAULT_TOKEN};
use serde::Deserialize;
use std::path::Path;

/// Matches any host, origin, method or header.
pub const WILDCARD: &str = "*";

/// Config file read when no path is given. Missing is fine.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Keys whose environment values are comma-separated lists.
const LIST_KEYS: &[&str] = &[
    "trusted_hosts",
    "cors_allow_headers",
    "cors_allow_methods",
    "cors_allow_origins",
];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub debug: bool,
    /// Log the effective settings at startup (only when `debug` is set too).
    #[serde(default)]
    pub show_settings: bool,
    /// Serve `/openapi.json` and `/docs/`.
    #[serde(default)]
    pub enable_openapi: bool,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Tokio worker threads.
    #[serde(default = "default_workers_count")]
    pub workers_count: usize,
    /// strftime pattern for log timestamps.
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
    /// Peers whose `X-Forwarded-*` headers are believed.
    #[serde(default = "default_wildcard_list")]
    pub trusted_hosts: Vec<String>,
    /// Flat `cors_*` keys, so `CORS_ALLOW_ORIGINS` maps without a separator.
    #[serde(flatten)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub log_level: LogLevel,
    #[serde(default)]
    pub log_use_colors: bool,
    #[serde(default)]
    pub authorizer: AuthorizerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(rename = "cors_allow_credentials", default = "default_true")]
    pub allow_credentials: bool,
    #[serde(rename = "cors_allow_headers", default = "default_wildcard_list")]
    pub allow_headers: Vec<String>,
    #[serde(rename = "cors_allow_methods", default = "default_wildcard_list")]
    pub allow_methods: Vec<String>,
    #[serde(rename = "cors_allow_origins", default = "default_wildcard_list")]
    pub allow_origins: Vec<String>,
}

/// Connection authorizer rule settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizerConfig {
    #[serde(default = "default_token")]
    pub token: String,
    #[serde(default = "default_route_key")]
    pub route_key: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_workers_count() -> usize {
    1
}

fn default_datetime_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

fn default_wildcard_list() -> Vec<String> {
    vec![WILDCARD.to_string()]
}

fn default_true() -> bool {
    true
}

fn default_token() -> String {
    DEFAULT_TOKEN.to_string()
}

fn default_route_key() -> String {
    CONNECT_ROUTE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            show_settings: false,
            enable_openapi: false,
            host: default_host(),
            port: default_port(),
            workers_count: default_workers_count(),
            datetime_format: default_datetime_format(),
            trusted_hosts: default_wildcard_list(),
            cors: CorsConfig::default(),
            log_level: LogLevel::default(),
            log_use_colors: false,
            authorizer: AuthorizerConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_credentials: true,
            allow_headers: default_wildcard_list(),
            allow_methods: default_wildcard_list(),
            allow_origins: default_wildcard_list(),
        }
    }
}

impl Default for AuthorizerConfig {
    fn default() -> Self {
        Self {
            token: default_token(),
            route_key: default_route_key(),
        }
    }
}

impl AuthorizerConfig {
    pub fn rule(&self) -> TokenRule {
        TokenRule::new(self.token.clone(), self.route_key.clone())
    }
}

impl Config {
    /// Load config from `path` (required) or the default location
    /// (optional), overlaid with the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, environment())
    }

    /// Load config from a file and an explicit environment source.
    pub fn load_with(path: Option<&Path>, env: Environment) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(false),
        };
        let source = path.map_or(DEFAULT_CONFIG_PATH.into(), |p| p.display().to_string());

        ::config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .with_context(|| format!("Failed to load config from {source}"))?
            .try_deserialize()
            .with_context(|| format!("Invalid configuration in {source} or environment"))
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.workers_count == 0 {
            bail!("workers_count must be at least 1");
        }
        if self.host.trim().is_empty() {
            bail!("host must not be empty");
        }
        Ok(())
    }

    /// Whether the effective settings should be logged at startup.
    pub fn should_show_settings(&self) -> bool {
        self.debug && self.show_settings
    }

    /// Whether `X-Forwarded-*` headers from this peer are trusted.
    pub fn is_trusted_host(&self, host: &str) -> bool {
        self.trusted_hosts
            .iter()
            .any(|h| h == WILDCARD || h == host)
    }
}

/// Environment source: unprefixed variables, `__` for nested sections
/// (`AUTHORIZER__TOKEN`) and comma-separated lists (`CORS_ALLOW_ORIGINS`).
pub fn environment() -> Environment {
    LIST_KEYS.iter().fold(
        Environment::default()
            .separator("__")
            .try_parsing(true)
            .list_separator(","),
        |env, key| env.with_list_parse_key(key),
    )
}
