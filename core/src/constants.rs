/// Timestamps on the wire are milliseconds but must land on whole seconds.
pub const MILLISECONDS_PER_SECOND: i64 = 1000;

/// Wire widths of the primitive fields.
pub const INT64_LEN: usize = 8;
pub const UINT64_LEN: usize = 8;
pub const ID_LEN: usize = 32;

/// Encoded size of the transaction base header:
/// timestamp (8) + chain id (32) + unit price (8).
pub const BASE_HEADER_LEN: usize = INT64_LEN + ID_LEN + UINT64_LEN;

/// Defaults when no rule set is supplied by configuration.
pub const DEFAULT_VALIDITY_WINDOW_MS: i64 = 60 * MILLISECONDS_PER_SECOND;
pub const DEFAULT_MIN_UNIT_PRICE: u64 = 1;

/// Upper bound for a `Packer` built without an explicit limit (2 MiB).
pub const MAX_PACKER_SIZE: usize = 2 * 1024 * 1024;
