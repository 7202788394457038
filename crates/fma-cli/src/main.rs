use fma_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; stdout stays clean for the
    // progress lines either way.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    std::process::exit(Cli::run_from_args());
}
