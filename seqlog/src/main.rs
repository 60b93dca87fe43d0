use std::sync::Arc;

use seqlog::{Coordinator, Error, LogEmitter, SeqLogConfig, diagnostics};

fn main() -> Result<(), Error> {
    let config = SeqLogConfig::load()?;
    diagnostics::init(config.diagnostics_level()?)?;

    let emitter = Arc::new(LogEmitter::stdout());
    let report = Coordinator::from_config(emitter, &config).run()?;
    log::info!(
        "{} workers joined on {} logical CPUs",
        report.workers_joined,
        report.hardware_concurrency
    );
    Ok(())
}
