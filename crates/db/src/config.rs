use std::time::Duration;

/// Database connection settings loaded from environment variables.
///
/// Pool sizing and timeouts are deployment-time concerns; nothing here is
/// adjusted per request.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Upper bound on open connections (default: `25`).
    pub max_connections: u32,
    /// Connections kept open while idle (default: `5`).
    pub min_connections: u32,
    /// Maximum lifetime of a pooled connection (default: 5 minutes).
    pub max_lifetime: Duration,
    /// How long a caller waits for a free connection (default: 5 seconds).
    pub acquire_timeout: Duration,
    /// Upper bound on a single store call (default: 10 seconds).
    pub query_timeout: Duration,
    /// Startup connection attempts before giving up (default: `10`).
    pub connect_attempts: u32,
    /// Delay between startup connection attempts (default: 2 seconds).
    pub connect_retry_delay: Duration,
}

impl DbConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `DATABASE_URL`            | required |
    /// | `DB_MAX_CONNECTIONS`      | `25`    |
    /// | `DB_MIN_CONNECTIONS`      | `5`     |
    /// | `DB_MAX_LIFETIME_SECS`    | `300`   |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`     |
    /// | `DB_QUERY_TIMEOUT_SECS`   | `10`    |
    /// | `DB_CONNECT_ATTEMPTS`     | `10`    |
    /// | `DB_CONNECT_RETRY_SECS`   | `2`     |
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        Self {
            database_url,
            max_connections: env_or("DB_MAX_CONNECTIONS", 25),
            min_connections: env_or("DB_MIN_CONNECTIONS", 5),
            max_lifetime: Duration::from_secs(env_or("DB_MAX_LIFETIME_SECS", 300)),
            acquire_timeout: Duration::from_secs(env_or("DB_ACQUIRE_TIMEOUT_SECS", 5)),
            query_timeout: Duration::from_secs(env_or("DB_QUERY_TIMEOUT_SECS", 10)),
            connect_attempts: env_or("DB_CONNECT_ATTEMPTS", 10),
            connect_retry_delay: Duration::from_secs(env_or("DB_CONNECT_RETRY_SECS", 2)),
        }
    }
}

/// Parse a numeric env var, panicking on malformed values so misconfiguration
/// fails at startup.
fn env_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid number: {e}")),
        Err(_) => default,
    }
}
