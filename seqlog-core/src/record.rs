use std::{fmt, thread::ThreadId};

use colored::Color;

use crate::timestamp::now_formatted;

/// Closing line of every block.
pub const SEPARATOR: &str = "---------------------------------";

/// Control sequence that restores the default console colour.
pub const COLOR_RESET: &str = "\x1b[0m";

/// Control sequence that switches the foreground to `color`.
pub fn color_prefix(color: Color) -> String {
    format!("\x1b[{}m", color.to_fg_str())
}

/// One log entry, built on each emit and dropped once written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: String,
    pub sequence: u64,
    pub label: String,
    pub function_name: String,
    pub thread_id: ThreadId,
}

impl LogRecord {
    /// Stamps the record with the current time and the calling thread.
    pub fn capture(sequence: u64, label: &str, function_name: &str) -> Self {
        Self {
            timestamp: now_formatted(),
            sequence,
            label: label.into(),
            function_name: function_name.into(),
            thread_id: std::thread::current().id(),
        }
    }

    /// The full block: colour prefix, four lines, reset suffix.
    pub fn render(&self, color: Color) -> String {
        format!("{}{self}{COLOR_RESET}", color_prefix(color))
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] #{} [{}]", self.timestamp, self.sequence, self.label)?;
        writeln!(f, "  Function : {}", self.function_name)?;
        writeln!(f, "  Thread ID: {:?}", self.thread_id)?;
        writeln!(f, "{SEPARATOR}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> LogRecord {
        LogRecord {
            timestamp: "09:08:07.006".into(),
            sequence: 12,
            label: "free_function #3".into(),
            function_name: "free_function".into(),
            thread_id: std::thread::current().id(),
        }
    }

    #[test]
    fn test_separator_width() {
        assert_eq!(SEPARATOR.len(), 33);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_display_layout() {
        let record = record();
        let thread_id = format!("{:?}", record.thread_id);
        assert_eq!(
            record.to_string(),
            format!(
                "[09:08:07.006] #12 [free_function #3]\n  Function : free_function\n  Thread ID: {thread_id}\n{SEPARATOR}\n"
            )
        );
    }

    #[test]
    fn test_render_wraps_with_color() {
        let record = record();
        let block = record.render(Color::Green);
        assert!(block.starts_with("\x1b[32m[09:08:07.006] #12"));
        assert!(block.ends_with(&format!("{SEPARATOR}\n\x1b[0m")));
        assert_eq!(block.lines().count(), 5);
    }

    #[test]
    fn test_color_prefix_codes() {
        assert_eq!(color_prefix(Color::Green), "\x1b[32m");
        assert_eq!(color_prefix(Color::Yellow), "\x1b[33m");
        assert_eq!(color_prefix(Color::Blue), "\x1b[34m");
    }

    #[test]
    fn test_capture_uses_calling_thread() {
        let record = std::thread::spawn(|| LogRecord::capture(1, "main", "main"))
            .join()
            .unwrap();
        assert_ne!(record.thread_id, std::thread::current().id());
        assert_eq!(record.sequence, 1);
        assert_eq!(record.timestamp.len(), "00:00:00.000".len());
    }
}
