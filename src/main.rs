// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod error;
mod extract;
mod metrics;
mod pipeline;
mod report;
mod sample;
mod stages;
mod types;
mod ui;

use cli::Command;
use log::debug;
use pipeline::RunOutcome;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Resolve configuration
    let config = match config::resolve_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };
    debug!("Using config: {:?}", config);

    let outcome = match args.command.execute(&config) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Keep stdout machine-readable when JSON is requested
    if args.json {
        match report::export_json(&outcome.data) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                ui::print_error(&e.to_string());
                std::process::exit(1);
            }
        }
    } else {
        print_outcome(&args, &outcome);
    }
}

/// Tell the user what was written
fn print_outcome(args: &cli::CliArgs, outcome: &RunOutcome) {
    let record = &outcome.data.record;

    match &args.command {
        Command::Demo { dir } => {
            ui::print_success(&format!("Clean report generated: {}", outcome.output_path.display()));
            ui::status(&format!("Raw log:      {}", dir.join(pipeline::DEMO_RAW_LOG).display()));
            ui::status(&format!("Clean report: {}", outcome.output_path.display()));
            ui::status("Usage: ci-log-report clean <INPUT> [OUTPUT]");
        }
        Command::Clean { .. } => {
            ui::print_success(&format!("Clean report generated: {}", outcome.output_path.display()));
        }
        Command::Dashboard { .. } => {
            ui::print_success(&format!("HTML dashboard generated: {}", outcome.output_path.display()));
            let shown = outcome.output_path.canonicalize().unwrap_or_else(|_| outcome.output_path.clone());
            ui::status(&format!("Open in browser: file://{}", shown.display()));
        }
        Command::Executive { .. } => {
            ui::print_success(&format!("Executive report generated: {}", outcome.output_path.display()));
            ui::status(&format!("Build #{} summary created for leadership review", record.build_number));
        }
    }

    ui::status(&format!(
        "{} stages, {} tests, status {}",
        outcome.data.stages.len(),
        outcome.data.tests.total_tests(),
        record.status.as_str()
    ));
}
