//! Network constants for the Lemmy REST API.

/// Default instance used when the builder is not given one.
pub const DEFAULT_INSTANCE_URL: &str = "https://lemmy.world";

/// Versioned REST prefix, relative to the instance URL.
pub const API_PATH: &str = "api/v3";

/// Image host prefix, relative to the instance URL.
pub const PICTRS_PATH: &str = "pictrs/image";

/// Identifying user agent sent with every request.
pub const USER_AGENT: &str = concat!("lemmios-sdk/", env!("CARGO_PKG_VERSION"));

/// `max_depth` sent when listing comments.
pub const DEFAULT_COMMENT_MAX_DEPTH: u32 = 8;

/// Page size used by list endpoints unless the caller overrides it.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Transport error codes carried by [`crate::error::ApiError::Network`] when no
/// HTTP status is available. Always negative so they never collide with a status.
pub mod codes {
    pub const UNKNOWN: i32 = -1;
    pub const BAD_URL: i32 = -1000;
    pub const TIMED_OUT: i32 = -1001;
    pub const CANNOT_CONNECT: i32 = -1004;
    pub const CONNECTION_LOST: i32 = -1005;
}
