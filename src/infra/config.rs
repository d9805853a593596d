//! Centralized configuration (environment variables + defaults).

use crate::domain::item::RestaurantIdRule;
use anyhow::Context;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Runtime settings for the binaries.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub restaurant_id_rule: RestaurantIdRule,
}

impl Config {
    /// Loads `.env` (if present) and reads every setting from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        Ok(Self {
            database_url: database_url()?,
            bind_addr: bind_addr()?,
            max_connections: max_connections()?,
            restaurant_id_rule: restaurant_id_rule()?,
        })
    }
}

/// Database URL must be provided (no default) for safety.
pub fn database_url() -> anyhow::Result<String> {
    std::env::var("DATABASE_URL").context("DATABASE_URL must be set")
}

/// HTTP listen address, `0.0.0.0:3000` unless `BIND_ADDR` is set.
pub fn bind_addr() -> anyhow::Result<SocketAddr> {
    let raw = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    raw.parse::<SocketAddr>()
        .with_context(|| format!("BIND_ADDR must be a socket address, got '{}'", raw))
}

/// Pool size (at least 1).
pub fn max_connections() -> anyhow::Result<u32> {
    match std::env::var("DB_MAX_CONNECTIONS") {
        Ok(v) => Ok(v
            .parse::<u32>()
            .with_context(|| format!("DB_MAX_CONNECTIONS must be a valid u32, got '{}'", v))?
            .max(1)),
        Err(_) => Ok(DEFAULT_MAX_CONNECTIONS),
    }
}

/// How `rest_id` values are checked: `identifier` (default) or the legacy `email` rule.
pub fn restaurant_id_rule() -> anyhow::Result<RestaurantIdRule> {
    match std::env::var("RESTAURANT_ID_RULE") {
        Ok(v) => v
            .parse::<RestaurantIdRule>()
            .map_err(|e| anyhow::anyhow!("RESTAURANT_ID_RULE: {}", e)),
        Err(_) => Ok(RestaurantIdRule::default()),
    }
}
