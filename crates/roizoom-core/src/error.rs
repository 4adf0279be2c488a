use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoizoomError {
    #[error("Operation not supported by this display: {operation}")]
    UnsupportedOperation { operation: &'static str },

    #[error("Roi index {index} out of range (total: {total})")]
    RoiIndexOutOfRange { index: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, RoizoomError>;
