use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeartbeatError {
    #[error("failed to write status line: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] figment::Error),
}

pub type Result<T> = std::result::Result<T, HeartbeatError>;
