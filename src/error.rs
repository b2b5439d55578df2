// Crate-wide error type.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Creating a display window failed.
    #[error("Window init error: {0}")]
    WindowInit(String),

    /// Pushing a buffer to a window failed.
    #[error("Window update error: {0}")]
    WindowUpdate(String),

    /// Two buffers that must share a size did not.
    #[error("{op}: dimension mismatch (expected {expected:?}, found {found:?})")]
    DimensionMismatch {
        op: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Structuring element with a zero dimension.
    #[error("Invalid kernel size {0}x{1}")]
    InvalidKernel(usize, usize),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

pub type Result<T> = std::result::Result<T, Error>;
