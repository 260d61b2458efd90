use std::path::{Path, PathBuf};
use structopt::StructOpt;

const NAME: &str = "heapqueue";

const ABOUT: &str = "
heapqueue sorts integers and runs priority-queue scripts using a shared binary heap.
Input is read from PATH, or from stdin if no PATH is given.
Status lines on stdout start with '%'.
";

#[derive(StructOpt)]
pub(crate) enum Command {
    #[structopt(about = "heap-sort whitespace-separated integers")]
    Sort {
        #[structopt(long, help = "largest first")]
        descending: bool,

        #[structopt(parse(from_os_str), help = "path to input integers")]
        path: Option<PathBuf>,
    },
    #[structopt(about = "run an insert/update/pop script against a queue")]
    Schedule {
        #[structopt(
            long,
            help = "threads draining the queue, 0 for one per CPU",
            default_value = "1"
        )]
        workers: usize,

        #[structopt(parse(from_os_str), help = "path to input script")]
        path: Option<PathBuf>,
    },
}

impl Command {
    pub(crate) fn path(&self) -> Option<&Path> {
        match self {
            Self::Sort { path, .. } | Self::Schedule { path, .. } => {
                path.as_deref()
            }
        }
    }
}

#[derive(StructOpt)]
#[structopt(name = NAME, about = ABOUT)]
pub(crate) struct Options {
    #[structopt(long, help = "log heap operations")]
    pub(crate) verbose: bool,

    #[structopt(subcommand)]
    pub(crate) command: Command,
}

impl Options {
    pub(crate) fn parse() -> Self {
        Self::from_args()
    }
}
