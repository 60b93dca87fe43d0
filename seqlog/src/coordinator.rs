use std::{sync::Arc, thread::JoinHandle};

use seqlog_core::{Color, LogEmitter, LogStdout, LogWriter, function_name};

use crate::{
    config::SeqLogConfig,
    error::Error,
    task::{Foo, Task},
};

/// Outcome of a completed [`Coordinator::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Logical CPUs reported by the platform. Informational only.
    pub hardware_concurrency: usize,
    /// Worker threads that ran to completion.
    pub workers_joined: usize,
}

/// Logs its own startup, starts every worker on its own thread and waits for all of them.
pub struct Coordinator<W = LogStdout> {
    emitter: Arc<LogEmitter<W>>,
    object_workers: usize,
    standalone_workers: usize,
}

impl<W: LogWriter + 'static> Coordinator<W> {
    pub fn new(emitter: Arc<LogEmitter<W>>) -> Self {
        Self {
            emitter,
            object_workers: 4,
            standalone_workers: 3,
        }
    }

    pub fn from_config(emitter: Arc<LogEmitter<W>>, config: &SeqLogConfig) -> Self {
        Self::new(emitter)
            .with_object_workers(config.OBJECT_WORKERS)
            .with_standalone_workers(config.STANDALONE_WORKERS)
    }

    /// Sets the number of `Foo::member_function` workers.
    pub fn with_object_workers(self, count: usize) -> Self {
        Self {
            object_workers: count,
            ..self
        }
    }

    /// Sets the number of `free_function` workers.
    pub fn with_standalone_workers(self, count: usize) -> Self {
        Self {
            standalone_workers: count,
            ..self
        }
    }

    pub fn emitter(&self) -> &Arc<LogEmitter<W>> {
        &self.emitter
    }

    /// Object-bound tasks first, then standalone ones, ids starting at 1.
    pub fn tasks(&self) -> Vec<Task> {
        let foos = vec![Foo; self.object_workers];
        let object_bound = foos
            .into_iter()
            .enumerate()
            .map(|(i, foo)| Task::object_bound(Arc::clone(&self.emitter), foo, i + 1));
        let standalone = (1..=self.standalone_workers)
            .map(|id| Task::standalone(Arc::clone(&self.emitter), id));
        object_bound.chain(standalone).collect()
    }

    /// Runs the whole session and returns once every worker has terminated.
    ///
    /// The coordinator's own block is written before any thread exists, so on a
    /// fresh sequence it always carries number 1.
    pub fn run(&self) -> Result<RunReport, Error> {
        self.emitter.emit(Color::Yellow, "main", function_name!());

        let hardware_concurrency = num_cpus::get();
        self.emitter
            .note(&format!("Hardware concurrency: {hardware_concurrency}"));

        let tasks = self.tasks();
        log::debug!(
            "spawning {} object-bound and {} standalone workers",
            self.object_workers,
            self.standalone_workers
        );
        let mut handles = Vec::with_capacity(tasks.len());
        for task in tasks {
            let name = task.name().to_string();
            match task.spawn() {
                Ok(handle) => handles.push(handle),
                Err(err) => {
                    log::debug!("spawning {name} failed, joining {} started workers", handles.len());
                    join_all(handles).ok();
                    return Err(Error::Spawn(err));
                }
            }
        }

        let workers_joined = join_all(handles)?;
        log::debug!("joined {workers_joined} workers");
        Ok(RunReport {
            hardware_concurrency,
            workers_joined,
        })
    }
}

/// Joins every handle, even after a panicked one, and reports the first panic.
fn join_all(handles: Vec<JoinHandle<()>>) -> Result<usize, Error> {
    let mut joined = 0;
    let mut first_panic = None;
    for handle in handles {
        let name = handle.thread().name().unwrap_or("<unnamed>").to_string();
        match handle.join() {
            Ok(()) => joined += 1,
            Err(_) => {
                log::debug!("worker {name} panicked");
                first_panic.get_or_insert(name);
            }
        }
    }
    match first_panic {
        Some(name) => Err(Error::WorkerPanicked { name }),
        None => Ok(joined),
    }
}
