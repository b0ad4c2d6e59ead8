//! Centralized configuration (environment variables + defaults).
//!
//! `main` loads `.env` through `dotenv` before any of these are read.

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Which backing store the server opens at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

/// Database URL. No default; a missing value is reported by the store at connect time.
pub fn database_url() -> Option<String> {
    std::env::var("DATABASE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Pool size for the Postgres store (defaults to 5, never below 1).
pub fn database_max_connections() -> u32 {
    std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS)
        .max(1)
}

/// Listen address for the HTTP server.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}

/// `PRODUCT_STORE=memory` runs without a database; anything else means Postgres.
pub fn store_kind() -> StoreKind {
    parse_store_kind(std::env::var("PRODUCT_STORE").ok().as_deref())
}

fn parse_store_kind(raw: Option<&str>) -> StoreKind {
    match raw.map(|v| v.trim().to_lowercase()) {
        Some(v) if v == "memory" => StoreKind::Memory,
        _ => StoreKind::Postgres,
    }
}
