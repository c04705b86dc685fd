pub mod processor;
pub mod progress;
pub mod sleeper;
#[cfg(test)]
pub mod stub;

pub use processor::Processor;
pub use progress::{ProgressEvent, ProgressSink, StdoutProgressSink};
pub use sleeper::{Sleeper, TokioSleeper};
