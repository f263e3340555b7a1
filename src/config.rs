/// Configuration constants for the REST API
pub mod api {
    /// Top-level host suffix shared by every product domain
    pub const HOST_SUFFIX: &str = "twilio.com";

    /// Region used when an edge is configured without a region
    pub const DEFAULT_REGION: &str = "us1";

    /// Query parameter carrying the requested page size
    pub const PAGE_SIZE_PARAM: &str = "PageSize";

    /// Wire format for date filters (`yyyy-MM-ddTHH:mm:ss`)
    pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    /// Inclusive success range for HTTP status codes
    pub const SUCCESS_MIN: u16 = 200;
    pub const SUCCESS_MAX: u16 = 204;

    /// User agent sent with every request
    pub const USER_AGENT: &str = concat!("twilio-rest-rust/", env!("CARGO_PKG_VERSION"));
}

/// HTTP client tuning
pub mod http {
    use std::time::Duration;

    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
    pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);
    pub const TCP_KEEPALIVE: Duration = Duration::from_secs(60);
    pub const POOL_MAX_IDLE_PER_HOST: usize = 20;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the account SID
    pub const ACCOUNT_SID_ENV: &str = "TWILIO_ACCOUNT_SID";

    /// Environment variable holding the auth token
    pub const AUTH_TOKEN_ENV: &str = "TWILIO_AUTH_TOKEN";

    /// Environment variable holding the region
    pub const REGION_ENV: &str = "TWILIO_REGION";

    /// Environment variable holding the edge location
    pub const EDGE_ENV: &str = "TWILIO_EDGE";

    /// Credentials file path (relative to HOME)
    pub const FILE_PATH: &str = ".twilio/credentials.json";

    /// Profile used when none is given
    pub const DEFAULT_PROFILE: &str = "default";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
