use std::fmt::Display;
use std::str::FromStr;

/// Runtime settings read from the environment (and `.env`, via `dotenvy`).
///
/// | Env Var                    | Default                 |
/// |----------------------------|-------------------------|
/// | `HOST`                     | `0.0.0.0`               |
/// | `PORT`                     | `5000`                  |
/// | `CORS_ORIGINS`             | `http://localhost:5000` |
/// | `REQUEST_TIMEOUT_SECS`     | `30`                    |
/// | `DATABASE_MAX_CONNECTIONS` | `10`                    |
///
/// `DATABASE_URL` has no default and is read where the pool is opened.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated in `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub database_max_connections: u32,
}

impl ServerConfig {
    /// Panics on a value that does not parse; misconfiguration stops startup.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0".to_string()),
            port: env_or("PORT", 5000),
            cors_origins: parse_origins(&env_or(
                "CORS_ORIGINS",
                "http://localhost:5000".to_string(),
            )),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", 10),
        }
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => parse_setting(key, &raw),
        Err(_) => default,
    }
}

fn parse_setting<T>(key: &str, raw: &str) -> T
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .unwrap_or_else(|e| panic!("{key}='{raw}' is invalid: {e}"))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test ,,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn settings_parse_with_surrounding_whitespace() {
        let port: u16 = parse_setting("PORT", " 8080 ");
        assert_eq!(port, 8080);
    }

    #[test]
    #[should_panic(expected = "PORT='eighty' is invalid")]
    fn unparseable_setting_panics_with_key() {
        let _: u16 = parse_setting("PORT", "eighty");
    }
}
