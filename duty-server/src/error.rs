use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] duty_config::ConfigError),

    #[error("Database error: {0}")]
    Db(#[from] duty_db::DbError),

    #[error("Logger setup failed: {message}")]
    Logger { message: String },

    #[error("Metrics exporter setup failed: {message}")]
    Metrics { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
