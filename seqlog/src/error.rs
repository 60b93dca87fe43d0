use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("worker thread `{name}` panicked")]
    WorkerPanicked { name: String },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("unable to install diagnostics logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
