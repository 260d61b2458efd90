use crate::io::parse::Step;
use crate::io::report;
use crate::statistics::Statistics;
use crossbeam_utils::thread;
use heapqueue::{HighestFirst, PriorityQueue, Task};
use log::{debug, info};

type Queue = PriorityQueue<String, HighestFirst>;

fn print_task(task: &Task<String>) {
    println!("{} {}", task.payload(), task.priority());
}

fn apply(queue: &Queue, statistics: &Statistics, step: Step) {
    match step {
        Step::Insert { name, priority } => {
            queue.insert(name, priority);
            statistics.increment_inserted_tasks();
        }
        Step::Update { name, priority } => {
            if queue.update(&name, priority).is_ok() {
                statistics.increment_updated_tasks();
            } else {
                report::not_found(&name);
                statistics.increment_missing_tasks();
            }
        }
        Step::Pop => {
            if let Ok(task) = queue.pop() {
                print_task(&task);
                statistics.increment_popped_tasks();
            } else {
                report::queue_empty();
                statistics.increment_empty_pops();
            }
        }
    }
}

fn drain_task(queue: &Queue, statistics: &Statistics) {
    while let Ok(task) = queue.pop() {
        print_task(&task);
        statistics.increment_popped_tasks();
    }
}

fn drain(queue: &Queue, statistics: &Statistics, workers: usize) {
    if workers <= 1 {
        drain_task(queue, statistics);
        return;
    }

    info!("draining {} tasks with {} workers", queue.len(), workers);
    thread::scope(|scope| {
        for index in 0..workers {
            scope
                .builder()
                .name(format!("drain-{}", index))
                .spawn(|_| drain_task(queue, statistics))
                .expect("failed to spawn drain thread");
        }
    })
    .unwrap_or_else(|_| panic!("drain thread crashed"));
}

fn worker_count(workers: usize) -> usize {
    if workers == 0 {
        num_cpus::get()
    } else {
        workers
    }
}

pub(crate) fn run(steps: Vec<Step>, workers: usize) -> Statistics {
    let statistics = Statistics::default();
    let queue = Queue::default();
    let workers = worker_count(workers);

    debug!("running {} steps", steps.len());
    for step in steps {
        apply(&queue, &statistics, step);
    }
    drain(&queue, &statistics, workers);
    statistics
}
