use tracing_subscriber::EnvFilter;

use crate::config::{Config, Environment};
use crate::error::AppError;

pub fn init_logger(config: &Config) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(&config.log_level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match config.environment {
        // CloudWatch stamps every line already
        Environment::Production => builder
            .without_time()
            .with_ansi(false)
            .with_target(false)
            .try_init(),
        Environment::Development => builder.try_init(),
    };

    installed.map_err(|e| AppError::Logging(e.to_string()))
}
