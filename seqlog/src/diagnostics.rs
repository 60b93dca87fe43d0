//! Operational messages of seqlog itself, routed through the `log` facade to stderr.
//! Kept apart from stdout so they never land inside the block stream.

use std::io::Write;

use colored::Colorize;
use log::{Level, LevelFilter, Log};
use seqlog_core::now_formatted;

use crate::error::Error;

struct DiagnosticsLogger {
    level: LevelFilter,
}

impl Log for DiagnosticsLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_log(
            &record.args().to_string(),
            record.level(),
            record.module_path(),
        );
        writeln!(std::io::stderr().lock(), "{line}").ok();
    }

    fn flush(&self) {
        std::io::stderr().flush().ok();
    }
}

fn format_log(message: &str, level: Level, name: Option<&str>) -> String {
    let time = now_formatted();
    let level = match level {
        Level::Error => "ERROR".red(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".blue(),
        Level::Trace => "TRACE".purple(),
    };
    if let Some(name) = name {
        format!("[{time} {name} {level}] {message}")
    } else {
        format!("[{time} {level}] {message}")
    }
}

/// Installs the stderr diagnostics logger. `LevelFilter::Off` installs nothing.
pub fn init(level: LevelFilter) -> Result<(), Error> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    log::set_boxed_logger(Box::new(DiagnosticsLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}
