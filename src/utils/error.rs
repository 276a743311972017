use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for toclet operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for toclet operations
#[derive(Debug)]
pub enum TocError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Start level is deeper than the stop level
    InvalidLevels { start: u8, stop: u8 },
    /// A selector string could not be parsed
    Selector(String),
    /// Document could not be serialized back to HTML
    Serialize(String),
    /// Server error
    Server(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for TocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocError::Io(err) => write!(f, "IO error: {}", err),
            TocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TocError::InvalidLevels { start, stop } => write!(
                f,
                "Invalid start and stop levels, startLevel={}, stopLevel={}",
                start, stop
            ),
            TocError::Selector(selector) => write!(f, "Invalid selector: {}", selector),
            TocError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            TocError::Server(msg) => write!(f, "Server error: {}", msg),
            TocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for TocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TocError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for TocError {
    fn from(err: io::Error) -> Self {
        TocError::Io(err)
    }
}

impl From<String> for TocError {
    fn from(msg: String) -> Self {
        TocError::Generic(msg)
    }
}

impl From<&str> for TocError {
    fn from(msg: &str) -> Self {
        TocError::Generic(msg.to_string())
    }
}
