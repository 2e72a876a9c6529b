// ============================================================================
// Dispatch Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// No handler is registered for this message variant.
    #[error("message {0} not supported")]
    UnsupportedMessage(String),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl DispatchError {
    pub fn unsupported(message: &impl std::fmt::Display) -> Self {
        DispatchError::UnsupportedMessage(message.to_string())
    }
}
