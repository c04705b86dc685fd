use std::fmt;
use std::io::{self, Write};

/// A user-facing notification emitted while a record processes input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Attempt `attempt` of `max_attempts` is running
    Attempt { attempt: u32, max_attempts: u32 },
    /// All attempts finished; `message` is the final status line
    Completed { message: String },
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::Attempt {
                attempt,
                max_attempts,
            } => write!(f, "Attempt {} of {}", attempt, max_attempts),
            ProgressEvent::Completed { message } => write!(f, "{}", message),
        }
    }
}

/// Destination for progress notifications.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: &ProgressEvent) -> io::Result<()>;
}

/// Writes each notification as one line on stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutProgressSink;

impl ProgressSink for StdoutProgressSink {
    fn emit(&self, event: &ProgressEvent) -> io::Result<()> {
        write_line(&mut io::stdout().lock(), event)
    }
}

fn write_line<W: Write>(out: &mut W, event: &ProgressEvent) -> io::Result<()> {
    writeln!(out, "{}", event)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_event_renders_position() {
        let event = ProgressEvent::Attempt {
            attempt: 1,
            max_attempts: 3,
        };
        assert_eq!(event.to_string(), "Attempt 1 of 3");
    }

    #[test]
    fn completed_event_renders_message_verbatim() {
        let event = ProgressEvent::Completed {
            message: "Processing data: data".to_string(),
        };
        assert_eq!(event.to_string(), "Processing data: data");
    }

    #[test]
    fn events_are_written_one_per_line() {
        let mut out = Vec::new();
        write_line(
            &mut out,
            &ProgressEvent::Attempt {
                attempt: 1,
                max_attempts: 3,
            },
        )
        .unwrap();
        write_line(
            &mut out,
            &ProgressEvent::Completed {
                message: "Processing data: data".to_string(),
            },
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Attempt 1 of 3\nProcessing data: data\n"
        );
    }
}
