//! Shared constants for salescript.

/// Default number of history rows when the caller does not specify a limit.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Maximum number of history rows for any query (DoS protection).
pub const MAX_HISTORY_LIMIT: usize = 500;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Maximum accepted length of the free-text generation input, in bytes.
pub const MAX_INPUT_LEN: usize = 20_000;

/// Maximum accepted length of a company or team display name, in characters.
pub const MAX_NAME_LEN: usize = 200;
