use std::{
    io::Write,
    sync::{Arc, Mutex, PoisonError},
};

/// Destination for rendered log blocks.
///
/// Each call to `write_block` receives one complete block and must make it
/// appear as a contiguous unit relative to every other call.
pub trait LogWriter: Send + Sync {
    fn write_block(&self, block: &str);
    fn flush(&self);
}

impl<W: LogWriter + ?Sized> LogWriter for Arc<W> {
    fn write_block(&self, block: &str) {
        (**self).write_block(block)
    }

    fn flush(&self) {
        (**self).flush()
    }
}

impl<W: LogWriter + ?Sized> LogWriter for &W {
    fn write_block(&self, block: &str) {
        (**self).write_block(block)
    }

    fn flush(&self) {
        (**self).flush()
    }
}

/// Writes blocks to the process stdout.
///
/// The stdout lock is held across the write and the flush, so blocks from
/// different threads never tear even when the terminal splits large writes.
/// Failures are dropped.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogStdout;

impl LogWriter for LogStdout {
    fn write_block(&self, block: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = stdout.write_all(block.as_bytes()).and_then(|()| stdout.flush()) {
            log::trace!("console write failed: {err}");
        }
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

/// In-memory sink, cloned handles share one buffer.
#[derive(Default, Debug, Clone)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogWriter for LogCapture {
    fn write_block(&self, block: &str) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(block.as_bytes());
    }

    fn flush(&self) {}
}

#[test]
fn test_log_capture() {
    let capture = LogCapture::new();
    let handle = capture.clone();
    capture.write_block("Hello, world!\n");
    handle.write_block("rust is awesome !\n");
    assert_eq!(capture.contents(), "Hello, world!\nrust is awesome !\n");
    handle.clear();
    assert_eq!(capture.contents(), "");
}

#[test]
fn test_log_capture_through_arc() {
    let capture = Arc::new(LogCapture::new());
    let writer: Arc<dyn LogWriter> = capture.clone();
    writer.write_block("lorem ipsum\n");
    writer.flush();
    assert_eq!(capture.contents(), "lorem ipsum\n");
}

#[test]
fn test_log_stdout() {
    let stdout = LogStdout;
    stdout.write_block("Hello, world!\n");
    (&stdout).write_block("test\n");
    stdout.flush();
}
