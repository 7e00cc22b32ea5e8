// ============================================================================
// clio-cli/src/main.rs
// ============================================================================
//
// CLIO-COUNT: Main Entry Point
//
// Counts lines, words and bytes of the files named on the command line, or of
// standard input when there are none. The startup sequence is the one every
// clio-based program follows:
//
// 1. Install the `clio-count: ` log prefix
// 2. Parse arguments through the installed usage text
// 3. Print the information banner for -v, or process the inputs
//
// Any error is logged as a single line on standard error and the process
// exits with status 1.

use clio_cli::{Cli, logging, run_count, run_info, usage_text};
use clio_core::OrExit;

fn main() {
    logging::init_logging().or_exit();

    let cli: Cli = usage_text().parse();

    if cli.show_info {
        run_info().or_exit();
        return;
    }

    run_count(&cli).or_exit();
}
