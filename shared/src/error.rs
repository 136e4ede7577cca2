use thiserror::Error;

use crate::constants::DUPLICATE_OPTION_ERROR;

/// Failure talking to the key-value store that backs the option list.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to parse stored options: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Backend(String),
}

/// Every way a wheel operation can be refused.
#[derive(Debug, Error)]
pub enum WheelError {
    #[error("Option cannot be empty")]
    EmptyOption,

    #[error("{}", DUPLICATE_OPTION_ERROR)]
    DuplicateOption(String),

    #[error("No option at position {index} (the wheel has {len})")]
    NoSuchOption { index: usize, len: usize },

    #[error("The wheel is spinning")]
    SpinInProgress,

    #[error("There are no options to spin")]
    NoOptions,

    #[error("The wheel is not spinning")]
    NotSpinning,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl WheelError {
    /// Whether the user should be told about this refusal. The rest are
    /// silent no-ops from the user's point of view.
    pub fn is_user_notice(&self) -> bool {
        matches!(self, WheelError::DuplicateOption(_))
    }
}
