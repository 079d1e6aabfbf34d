use std::fmt;

use tracing_subscriber::filter::ParseError;

#[derive(Debug)]
pub enum AppError {
    EnvError(std::env::VarError),
    InvalidEnvironment(String),
    InvalidLogFilter(ParseError),
    Logging(String),
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::EnvError(err)
    }
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::InvalidLogFilter(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EnvError(e) => write!(f, "environment error: {e}"),
            AppError::InvalidEnvironment(value) => write!(f, "invalid ENVIRONMENT: {value}"),
            AppError::InvalidLogFilter(e) => write!(f, "invalid LOG_LEVEL: {e}"),
            AppError::Logging(e) => write!(f, "failed to install logger: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::EnvError(e) => Some(e),
            AppError::InvalidLogFilter(e) => Some(e),
            _ => None,
        }
    }
}
