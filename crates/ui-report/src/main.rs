// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! UI report binary entry point.

use clap::Parser;

use ui_report::cli::Cli;
use ui_report::diagnostic::print_error;
use ui_report::{generate, SystemClock};

fn main() {
    let cli = Cli::parse();

    match generate(&cli.report_options(), &SystemClock::new()) {
        Ok(summary) => println!("{}", summary.report_path.display()),
        Err(e) => {
            print_error(e);
            std::process::exit(1);
        }
    }
}
