use std::env::{self, VarError};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Builds the config from any variable source shaped like `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let environment = match optional(&lookup, "ENVIRONMENT")? {
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "development" | "dev" => Environment::Development,
                "production" | "prod" => Environment::Production,
                _ => return Err(AppError::InvalidEnvironment(value)),
            },
            // Inside Lambda the runtime always sets the function name.
            None if optional(&lookup, "AWS_LAMBDA_FUNCTION_NAME")?.is_some() => {
                Environment::Production
            }
            None => Environment::Development,
        };

        let log_level = optional(&lookup, "LOG_LEVEL")?.unwrap_or_else(|| "info".to_string());

        Ok(Config {
            environment,
            log_level,
        })
    }
}

fn optional<F>(lookup: &F, key: &str) -> Result<Option<String>, AppError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
