//! # seqlog-core
//! Core of seqlog: sequence numbers, timestamps and console blocks that never
//! interleave across threads.
//!
//! ```rust
//! use std::sync::Arc;
//! use seqlog_core::{Color, LogCapture, LogEmitter, SequenceGenerator, function_name};
//!
//! let capture = LogCapture::new();
//! let emitter = LogEmitter::new(Arc::new(SequenceGenerator::new()), capture.clone());
//! emitter.emit(Color::Yellow, "main", function_name!());
//! assert!(capture.contents().contains("#1 [main]"));
//! ```

mod emitter;
mod log_writer;
mod record;
mod sequence;
mod timestamp;
mod utils;

pub use colored::Color;
pub use emitter::LogEmitter;
pub use log_writer::{LogCapture, LogStdout, LogWriter};
pub use record::{COLOR_RESET, LogRecord, SEPARATOR, color_prefix};
pub use sequence::SequenceGenerator;
pub use timestamp::{format_timestamp, now_formatted};
pub use utils::short_function_name;
