use anyhow::{Context, Result, anyhow};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_MIN_CONN: u32 = 1;
const DEFAULT_DB_MAX_CONN: u32 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
    pub dev_mode: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, `init` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
            None | Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let db_min_conn = parse_or("DB_MIN_CONN", lookup("DB_MIN_CONN"), DEFAULT_DB_MIN_CONN)?;
        let db_max_conn = parse_or("DB_MAX_CONN", lookup("DB_MAX_CONN"), DEFAULT_DB_MAX_CONN)?;

        if db_min_conn > db_max_conn {
            return Err(anyhow!(
                "DB_MIN_CONN ({db_min_conn}) must not exceed DB_MAX_CONN ({db_max_conn})"
            ));
        }

        let dev_mode = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let enable_file_log = lookup("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            run_migrations,
            port,
            db_min_conn,
            db_max_conn,
            dev_mode,
            enable_file_log,
        })
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid integer, got '{value}'")),
        None => Ok(default),
    }
}
