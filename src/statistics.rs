use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::Relaxed;

#[derive(Default)]
pub(crate) struct Statistics {
    inserted_tasks: AtomicUsize,
    updated_tasks: AtomicUsize,
    missing_tasks: AtomicUsize,
    popped_tasks: AtomicUsize,
    empty_pops: AtomicUsize,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Counts {
    pub(crate) inserted_tasks: usize,
    pub(crate) updated_tasks: usize,
    pub(crate) missing_tasks: usize,
    pub(crate) popped_tasks: usize,
    pub(crate) empty_pops: usize,
}

impl Statistics {
    pub(crate) fn counts(&self) -> Counts {
        Counts {
            inserted_tasks: self.inserted_tasks.load(Relaxed),
            updated_tasks: self.updated_tasks.load(Relaxed),
            missing_tasks: self.missing_tasks.load(Relaxed),
            popped_tasks: self.popped_tasks.load(Relaxed),
            empty_pops: self.empty_pops.load(Relaxed),
        }
    }

    pub(crate) fn print(&self) {
        let counts = self.counts();
        println!("% inserted tasks\t: {}", counts.inserted_tasks);
        println!("% updated tasks\t: {}", counts.updated_tasks);
        println!("% missing tasks\t: {}", counts.missing_tasks);
        println!("% popped tasks\t: {}", counts.popped_tasks);
        println!("% empty pops\t: {}", counts.empty_pops);
    }

    pub(crate) fn increment_inserted_tasks(&self) {
        self.inserted_tasks.fetch_add(1, Relaxed);
    }

    pub(crate) fn increment_updated_tasks(&self) {
        self.updated_tasks.fetch_add(1, Relaxed);
    }

    pub(crate) fn increment_missing_tasks(&self) {
        self.missing_tasks.fetch_add(1, Relaxed);
    }

    pub(crate) fn increment_popped_tasks(&self) {
        self.popped_tasks.fetch_add(1, Relaxed);
    }

    pub(crate) fn increment_empty_pops(&self) {
        self.empty_pops.fetch_add(1, Relaxed);
    }
}
