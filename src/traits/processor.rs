use async_trait::async_trait;

use crate::errors::ProcessError;

/// Capability shared by anything that can identify itself and process text input.
///
/// Callers depend on this trait rather than on [`Record`](crate::record::Record)
/// so other implementations can stand in for it.
#[async_trait]
pub trait Processor: Send + Sync {
    /// Current identity of the processor. Pure.
    fn identity(&self) -> String;

    /// Validate `input` and run the processing work over it.
    ///
    /// Returns `ProcessError::ValidationFailure` when the input is rejected
    /// before any work starts, or another variant when work fails part way.
    async fn process(&self, input: &str) -> Result<(), ProcessError>;
}
