pub const INVALID_INPUT: &str = "invalid_input";
pub const CONNECTION_FAILED: &str = "connection_failed";
pub const REJECTED: &str = "rejected";
pub const INTERNAL_ERROR: &str = "internal_error";
