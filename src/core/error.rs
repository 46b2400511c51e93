use std::fmt;

/// Error types for vsentinel operations
#[derive(Debug)]
pub enum SentinelError {
    /// IO error (file operations, socket binding, etc.)
    Io(std::io::Error),

    /// CSV reading or parsing error
    Csv(csv::Error),

    /// Dataset file does not exist
    DatasetNotFound(String),

    /// A required column is absent from the dataset header
    MissingColumn(String),

    /// An emotion cell could not be coerced to a boolean
    MalformedValue {
        row: usize,
        column: String,
        value: String,
    },

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Invalid argument error
    InvalidArgument(String),

    /// JSON serialization error
    Serialization(serde_json::Error),

    /// HTTP server error
    Server(String),
}

impl fmt::Display for SentinelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentinelError::Io(err) => write!(f, "IO error: {err}"),
            SentinelError::Csv(err) => write!(f, "CSV error: {err}"),
            SentinelError::DatasetNotFound(path) => write!(f, "Dataset not found: {path}"),
            SentinelError::MissingColumn(column) => {
                write!(f, "Missing required column: {column}")
            }
            SentinelError::MalformedValue { row, column, value } => write!(
                f,
                "Malformed value: '{value}' in column '{column}' at row {row} is not a boolean"
            ),
            SentinelError::Config(msg) => write!(f, "Configuration error: {msg}"),
            SentinelError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            SentinelError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            SentinelError::Serialization(err) => write!(f, "Serialization error: {err}"),
            SentinelError::Server(msg) => write!(f, "Server error: {msg}"),
        }
    }
}

impl std::error::Error for SentinelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SentinelError::Io(err) => Some(err),
            SentinelError::Csv(err) => Some(err),
            SentinelError::TomlParsing(err) => Some(err),
            SentinelError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SentinelError {
    fn from(err: std::io::Error) -> Self {
        SentinelError::Io(err)
    }
}

impl From<csv::Error> for SentinelError {
    fn from(err: csv::Error) -> Self {
        SentinelError::Csv(err)
    }
}

impl From<toml::de::Error> for SentinelError {
    fn from(err: toml::de::Error) -> Self {
        SentinelError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for SentinelError {
    fn from(err: serde_json::Error) -> Self {
        SentinelError::Serialization(err)
    }
}

/// Type alias for Results using SentinelError
pub type Result<T> = std::result::Result<T, SentinelError>;
