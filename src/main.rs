use clap::Parser;

use sync_guard::cli::Cli;
use sync_guard::commands::run_scan;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_scan(&cli));
}
