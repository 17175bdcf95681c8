use super::errors::ProductError;

/// Mutating catalog operations that pass through the write guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOperation {
    Create,
    Update,
    Delete,
}

impl WriteOperation {
    /// Fixed explanation returned to callers when the operation is refused.
    pub fn disabled_message(&self) -> &'static str {
        match self {
            WriteOperation::Create => "Product creation disabled - authentication required",
            WriteOperation::Update => "Product updates disabled - authentication required",
            WriteOperation::Delete => "Product deletion disabled - authentication required",
        }
    }
}

impl std::fmt::Display for WriteOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteOperation::Create => write!(f, "create"),
            WriteOperation::Update => write!(f, "update"),
            WriteOperation::Delete => write!(f, "delete"),
        }
    }
}

/// Guard consulted before any catalog write reaches a use case.
pub trait WritePolicy: Send + Sync {
    fn authorize(&self, operation: WriteOperation) -> Result<(), ProductError>;
}

/// Deployed posture: there is no authentication subsystem, so every write is refused.
pub struct WritesDisabled;

impl WritePolicy for WritesDisabled {
    fn authorize(&self, operation: WriteOperation) -> Result<(), ProductError> {
        Err(ProductError::WriteDisabled(operation))
    }
}
