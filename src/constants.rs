/// Upper bound for a lesson score (percentage).
pub const MAX_SCORE: u32 = 100;

/// Maximum accepted request body size: 2 MiB.
pub const MAX_BODY_SIZE: usize = 2 * 1024 * 1024;

/// How many rotated log files to keep when file logging is enabled.
pub const MAX_LOG_FILES: usize = 30;
