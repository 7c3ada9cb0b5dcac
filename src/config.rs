/// Hard ceiling on any multipart upload body (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const DEFAULT_DATABASE_URL: &str = "sqlite://catpics.sqlite3";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 15;

#[derive(Clone, Debug)]
pub struct CatpicsConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: String,
}

impl CatpicsConfig {
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let max_connections = parse_max_connections(std::env::var("MAX_CONNECTIONS").ok());

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Self {
            database_url,
            max_connections,
            bind_addr,
        }
    }
}

// garbage or zero falls back to the default rather than failing boot
fn parse_max_connections(raw: Option<String>) -> u32 {
    raw.and_then(|val| val.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MAX_CONNECTIONS)
}
