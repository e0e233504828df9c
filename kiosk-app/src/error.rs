#[derive(Debug, thiserror::Error)]
pub enum KioskError {
    #[error("Input stream closed")]
    InputClosed,

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type KioskResult<T> = Result<T, KioskError>;
