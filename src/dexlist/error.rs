use thiserror::Error;

#[derive(Error, Debug)]
pub enum DexError {
    #[error("Unable to allocate storage for {capacity} records")]
    Allocation { capacity: usize },

    #[error("Position {pos} is invalid for a list of {len} records")]
    InvalidPosition { pos: i64, len: usize },

    #[error("The list is full ({capacity} records)")]
    CapacityExceeded { capacity: usize },

    #[error("The list is empty")]
    EmptyList,

    #[error("Malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("Key {key} is out of range (catalog holds {len} records)")]
    KeyOutOfRange { key: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DexError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        DexError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// Converts a 0-based position into the signed form carried by `InvalidPosition`.
    pub fn invalid_position(pos: usize, len: usize) -> Self {
        DexError::InvalidPosition {
            pos: i64::try_from(pos).unwrap_or(i64::MAX),
            len,
        }
    }

    /// Process exit code for this error: the OS code for I/O failures, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            DexError::Io(e) => e.raw_os_error().filter(|code| *code != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DexError>;
