// Record constraints, mirrored by the `country` table columns
pub const CODE_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_INTEGER_DIGITS: usize = 11;
pub const MAX_DECIMAL_DIGITS: usize = 8;

pub const COUNTRY_TABLE: &str = "country";

// Presentation
pub const MISSING_VALUE: &str = "--";
pub const RULE_WIDTH: usize = 80;
pub const DISPLAY_DECIMALS: usize = 2;

// Connection handling
pub const RECONNECT_ATTEMPTS: u32 = 3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_RETRY_INTERVAL_SECS: u64 = 5;
pub const MAX_POOL_CONNECTIONS: usize = 4;
