use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use seqlog_core::{Color, LogEmitter, LogWriter, function_name};

/// A named unit of work run on its own thread.
pub struct Task {
    name: String,
    job: Box<dyn FnOnce() + Send + 'static>,
}

impl Task {
    pub fn new<F: FnOnce() + Send + 'static>(name: impl Into<String>, job: F) -> Self {
        Self {
            name: name.into(),
            job: Box::new(job),
        }
    }

    /// Task running [`free_function`] with the given id.
    pub fn standalone<W: LogWriter + 'static>(emitter: Arc<LogEmitter<W>>, id: usize) -> Self {
        Self::new(format!("free_function #{id}"), move || {
            free_function(&emitter, id)
        })
    }

    /// Task running [`Foo::member_function`] on `foo`, which the task takes over.
    pub fn object_bound<W: LogWriter + 'static>(
        emitter: Arc<LogEmitter<W>>,
        foo: Foo,
        id: usize,
    ) -> Self {
        Self::new(format!("Foo::member_function #{id}"), move || {
            foo.member_function(&emitter, id)
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the task on the calling thread.
    pub fn run(self) {
        (self.job)()
    }

    /// Starts the task on a new OS thread named after the task.
    pub fn spawn(self) -> std::io::Result<JoinHandle<()>> {
        thread::Builder::new().name(self.name).spawn(self.job)
    }
}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Standalone worker: one green block labelled `free_function #<id>`.
pub fn free_function<W: LogWriter>(emitter: &LogEmitter<W>, id: usize) {
    emitter.emit(Color::Green, &format!("free_function #{id}"), function_name!());
}

/// Object whose method serves as the object-bound worker.
#[derive(Debug, Default, Clone, Copy)]
pub struct Foo;

impl Foo {
    /// Object-bound worker: one blue block labelled `Foo::member_function #<id>`.
    pub fn member_function<W: LogWriter>(&self, emitter: &LogEmitter<W>, id: usize) {
        emitter.emit(
            Color::Blue,
            &format!("Foo::member_function #{id}"),
            function_name!(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqlog_core::{LogCapture, SequenceGenerator};

    fn capture_emitter() -> (Arc<LogEmitter<LogCapture>>, LogCapture) {
        let capture = LogCapture::new();
        let emitter = LogEmitter::new(Arc::new(SequenceGenerator::new()), capture.clone());
        (Arc::new(emitter), capture)
    }

    #[test]
    fn test_free_function_block() {
        let (emitter, capture) = capture_emitter();
        free_function(&emitter, 2);
        let output = capture.contents();
        assert!(output.starts_with("\x1b[32m"));
        assert!(output.contains("#1 [free_function #2]\n"));
        assert!(output.contains("  Function : free_function\n"));
    }

    #[test]
    fn test_member_function_block() {
        let (emitter, capture) = capture_emitter();
        Foo.member_function(&emitter, 4);
        let output = capture.contents();
        assert!(output.starts_with("\x1b[34m"));
        assert!(output.contains("#1 [Foo::member_function #4]\n"));
        assert!(output.contains("  Function : member_function\n"));
    }

    #[test]
    fn test_task_names() {
        let (emitter, _) = capture_emitter();
        assert_eq!(Task::standalone(Arc::clone(&emitter), 1).name(), "free_function #1");
        assert_eq!(
            Task::object_bound(emitter, Foo, 3).name(),
            "Foo::member_function #3"
        );
    }

    #[test]
    fn test_spawned_task_runs_on_named_thread() {
        let (emitter, capture) = capture_emitter();
        let main_id = format!("{:?}", thread::current().id());
        let handle = Task::standalone(emitter, 1).spawn().unwrap();
        assert_eq!(handle.thread().name(), Some("free_function #1"));
        handle.join().unwrap();
        let output = capture.contents();
        assert!(output.contains("[free_function #1]"));
        assert!(!output.contains(&format!("Thread ID: {main_id}\n")));
    }

    #[test]
    fn test_custom_task_runs_inline() {
        let (emitter, capture) = capture_emitter();
        let shared = Arc::clone(&emitter);
        Task::new("custom", move || shared.emit(Color::Magenta, "custom", "custom_job")).run();
        assert!(capture.contents().contains("#1 [custom]"));
        assert!(capture.contents().contains("  Function : custom_job\n"));
    }
}
