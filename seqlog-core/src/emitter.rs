use std::sync::Arc;

use colored::Color;

use crate::{
    log_writer::{LogStdout, LogWriter},
    record::{LogRecord, SEPARATOR},
    sequence::SequenceGenerator,
    timestamp::now_formatted,
};

/// Composes log blocks and hands each one to the writer in a single call.
pub struct LogEmitter<W = LogStdout> {
    sequence: Arc<SequenceGenerator>,
    writer: W,
}

impl LogEmitter<LogStdout> {
    /// Emitter writing to stdout with a fresh sequence starting at 1.
    pub fn stdout() -> Self {
        Self::new(Arc::new(SequenceGenerator::new()), LogStdout)
    }
}

impl<W: LogWriter> LogEmitter<W> {
    pub fn new(sequence: Arc<SequenceGenerator>, writer: W) -> Self {
        Self { sequence, writer }
    }

    pub fn sequence(&self) -> &Arc<SequenceGenerator> {
        &self.sequence
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Writes one block tagged with the next sequence number.
    pub fn emit(&self, color: Color, label: &str, function_name: &str) {
        let record = LogRecord::capture(self.sequence.next(), label, function_name);
        self.writer.write_block(&record.render(color));
    }

    /// Writes an uncoloured `[TIMESTAMP] message` line and the separator.
    /// Does not consume a sequence number.
    pub fn note(&self, message: &str) {
        let block = format!("[{}] {message}\n{SEPARATOR}\n", now_formatted());
        self.writer.write_block(&block);
    }
}
