pub const INVALID_INPUT: &str = "invalid_input";
pub const TOO_LARGE: &str = "too_large";
pub const UNSUPPORTED_FORMAT: &str = "unsupported_format";
pub const INTERNAL_ERROR: &str = "internal_error";

/// JSON-RPC error code for an unknown method.
pub const METHOD_NOT_FOUND: i64 = -32601;
