use std::str::FromStr;

use derive_from_env::FromEnv;
use log::LevelFilter;

use crate::error::Error;

/// Run settings, read from `SEQLOG_*` environment variables.
/// An empty environment gives the reference run: 4 object-bound workers,
/// 3 standalone workers, no diagnostics.
#[derive(FromEnv, Debug)]
#[from_env(prefix = "SEQLOG")]
#[allow(non_snake_case)]
pub struct SeqLogConfig {
    #[from_env(default = "4")]
    pub OBJECT_WORKERS: usize,
    #[from_env(default = "3")]
    pub STANDALONE_WORKERS: usize,
    #[from_env(default = "off")]
    pub DIAGNOSTICS: String,
}

impl SeqLogConfig {
    pub fn load() -> Result<Self, Error> {
        Self::from_env().map_err(|e| Error::Config(format!("{e:?}")))
    }

    pub fn diagnostics_level(&self) -> Result<LevelFilter, Error> {
        LevelFilter::from_str(self.DIAGNOSTICS.trim()).map_err(|_| {
            Error::Config(format!(
                "SEQLOG_DIAGNOSTICS must be one of off, error, warn, info, debug, trace (got {:?})",
                self.DIAGNOSTICS
            ))
        })
    }
}
