use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("Vendor request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to parse {format} configuration: {message}")]
    ConfigParseError { format: String, message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Vendor responded with an error: {message}")]
    VendorError { message: String },
}

impl ScoutError {
    /// 是否屬於設定檔相關的錯誤
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ScoutError::ConfigParseError { .. }
                | ScoutError::MissingConfigError { .. }
                | ScoutError::InvalidConfigValueError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;
