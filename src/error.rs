use thiserror::Error;

/// Errors that can occur while fetching, scaling, or persisting recipes
#[derive(Error, Debug)]
pub enum PlatefulError {
    /// Failed to reach the recipe API (network, timeout, non-2xx status)
    #[error("Failed to fetch from recipe API: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The API answered but the payload was not what we expected
    #[error("Malformed API response: {0}")]
    Api(String),

    /// Serving counts below 1 are rejected at the session boundary and
    /// asserted defensively by the scaler
    #[error("Servings must be at least 1, got {0}")]
    InvalidServings(u32),

    /// Durable key-value storage failure
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Failed to (de)serialize the durable likes array
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
