//! # seqlog
//! Console log blocks from concurrently running threads that never interleave.
//!
//! Every block carries a timestamp, a unique sequence number, a label, the
//! name of the function that logged it and the id of its thread:
//!
//! ```text
//! [14:03:27.512] #3 [free_function #1]
//!   Function : free_function
//!   Thread ID: ThreadId(4)
//! ---------------------------------
//! ```
//!
//! ## Usage
//! ```rust
//! use std::sync::Arc;
//! use seqlog::{Coordinator, LogCapture, LogEmitter, SequenceGenerator};
//!
//! let capture = LogCapture::new();
//! let emitter = Arc::new(LogEmitter::new(Arc::new(SequenceGenerator::new()), capture.clone()));
//! let report = Coordinator::new(emitter).run().unwrap();
//! assert_eq!(report.workers_joined, 7);
//! assert!(capture.contents().contains("#1 [main]"));
//! ```
//!
//! ## Custom tasks
//! ```rust
//! use std::sync::Arc;
//! use seqlog::{Color, LogEmitter, Task, function_name};
//!
//! let emitter = Arc::new(LogEmitter::stdout());
//! let shared = Arc::clone(&emitter);
//! let handle = Task::new("reporter", move || {
//!     shared.emit(Color::Magenta, "reporter", function_name!())
//! })
//! .spawn()
//! .unwrap();
//! handle.join().unwrap();
//! ```

pub mod diagnostics;

mod config;
mod coordinator;
mod error;
mod task;

pub use config::SeqLogConfig;
pub use coordinator::{Coordinator, RunReport};
pub use error::Error;
pub use task::{Foo, Task, free_function};

pub use seqlog_core::{
    Color, LogCapture, LogEmitter, LogRecord, LogStdout, LogWriter, SEPARATOR, SequenceGenerator,
    function_name, now_formatted,
};
