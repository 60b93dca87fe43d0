use std::sync::Arc;

use seqlog::{Color, Foo, LogEmitter, SequenceGenerator, Task, function_name};

fn main() {
    // one sequence shared by every emitter
    let sequence = Arc::new(SequenceGenerator::new());
    let emitter = Arc::new(LogEmitter::new(Arc::clone(&sequence), seqlog::LogStdout));

    emitter.emit(Color::Yellow, "main", function_name!());

    let mut tasks = vec![
        Task::object_bound(Arc::clone(&emitter), Foo, 1),
        Task::standalone(Arc::clone(&emitter), 1),
    ];
    for i in 1..=3 {
        let emitter = Arc::clone(&emitter);
        tasks.push(Task::new(format!("checksum #{i}"), move || {
            let sum: u64 = (0..1_000u64 * i).sum();
            emitter.emit(
                Color::Magenta,
                &format!("checksum #{i} = {sum}"),
                function_name!(),
            );
        }));
    }

    let handles: Vec<_> = tasks
        .into_iter()
        .map(|task| task.spawn().expect("Unable to spawn worker thread"))
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    emitter.note(&format!("{} blocks written", sequence.next() - 1));
}
