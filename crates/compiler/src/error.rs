use thiserror::Error;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("separator must be non-empty and contain no whitespace, got {0:?}")]
    InvalidSeparator(String),

    #[error("darkMode must be \"class\", \"media\" or false, got {0}")]
    InvalidDarkMode(String),
}
