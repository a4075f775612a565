use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("metric already registered: {0}")]
    AlreadyRegistered(String),
    #[error("failed to acquire metrics registry lock")]
    PoisonedRegistry,
}

pub type Result<T> = std::result::Result<T, MetricsError>;
