mod io;
mod options;
mod schedule;
mod statistics;

use crate::io::{input, log, parse, report};
use crate::options::{Command, Options};
use heapqueue::{heap_sort, MaxOrder, MinOrder};

fn sorted(numbers: Vec<i64>, descending: bool) -> Vec<i64> {
    if descending {
        heap_sort(numbers, MinOrder)
    } else {
        heap_sort(numbers, MaxOrder)
    }
}

fn sort(text: &str, descending: bool) {
    let numbers =
        parse::numbers(text).unwrap_or_else(|err| report::input_error(err));
    for number in sorted(numbers, descending) {
        println!("{}", number);
    }
}

fn main() {
    let options = Options::parse();
    log::start_logging(options.verbose);

    let input = input::load(options.command.path());
    let text =
        parse::text(&input).unwrap_or_else(|err| report::input_error(err));
    match options.command {
        Command::Sort { descending, .. } => sort(text, descending),
        Command::Schedule { workers, .. } => {
            let steps = parse::script(text)
                .unwrap_or_else(|err| report::input_error(err));
            let statistics = schedule::run(steps, workers);
            statistics.print();
        }
    }
    report::success()
}
