use std::fmt::Display;
use std::process::exit;

pub(crate) fn success() -> ! {
    exit(0)
}

pub(crate) fn failure() -> ! {
    exit(1)
}

pub(crate) fn os_error<E: Display>(error: E) -> ! {
    println!("% failed to read input: {}", error);
    failure()
}

pub(crate) fn input_error<E: Display>(error: E) -> ! {
    println!("% input error: {}", error);
    failure()
}

pub(crate) fn not_found(name: &str) {
    println!("% not found: {}", name);
}

pub(crate) fn queue_empty() {
    println!("% queue empty");
}
