// src/config/consts.rs

// Prediction service
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/predict";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Config sources
pub const CONFIG_FILE: &str = "used_car_price.toml";
pub const ENV_PREFIX: &str = "UCP_";

// Local files
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Display
pub const PLACEHOLDER: &str = "--";
pub const SLOT_COUNT: usize = 3;

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 760.0;
