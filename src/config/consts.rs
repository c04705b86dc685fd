/// Number of attempts the attempt loop runs when not configured
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Wait after each attempt, in seconds, when not configured
pub const DEFAULT_ATTEMPT_DELAY_SECONDS: u64 = 30;
/// Prefix of the final status message emitted by `process`
pub const PROCESSING_MESSAGE_PREFIX: &str = "Processing data: ";
