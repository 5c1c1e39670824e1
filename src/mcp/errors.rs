pub const INVALID_INPUT: &str = "invalid_input";

pub const JSONRPC_PARSE_ERROR: i64 = -32700;
pub const JSONRPC_METHOD_NOT_FOUND: i64 = -32601;
