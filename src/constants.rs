//! Application Constants
//!
//! Centralized constants for layout, endpoints and file names.

/// Records endpoint used when no configuration overrides it
pub const DEFAULT_CUSTOMERS_ENDPOINT: &str = "http://localhost:8000/users";

/// Environment variable overriding the configured endpoint
pub const ENDPOINT_ENV_VAR: &str = "CUSTOMER_LIST_ENDPOINT";

/// Settings file name inside the config directory
pub const SETTINGS_FILE_NAME: &str = "customer-list.toml";

/// Rolling log file prefix inside the log directory
pub const LOG_FILE_PREFIX: &str = "customer-list.log";

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 720.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 640.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Search input width in pixels
pub const SEARCH_INPUT_WIDTH: f32 = 300.0;
