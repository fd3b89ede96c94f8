//! Binary entry point for `adict`.

use adictools::{cli, ui};

fn main() {
    if let Err(e) = cli::run() {
        // {:#} renders the full context chain on one line.
        ui::output::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
