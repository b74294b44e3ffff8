use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid renderer config: {0}")]
    InvalidConfig(String),

    #[error("engine failure: {0}")]
    Engine(String),

    #[error("engine instance already disposed")]
    Disposed,
}
