//! tyq CLI
//!
//! Runs the registered type classification and deduction cases.

use tyq_harness::{
    init_tracing, parse_args, CaseOutcome, Command, Registry, Runner, Summary, USAGE,
};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let registry = match Registry::with_suites() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    match command {
        Command::Help => println!("{USAGE}"),
        Command::List(filter) => {
            for case in registry.filtered(filter.as_deref()) {
                println!("{}", case.full_name());
            }
        }
        Command::Run(config) => {
            let runner = match Runner::new(config) {
                Ok(runner) => runner,
                Err(e) => {
                    eprintln!("error: failed to declare fixtures: {e}");
                    std::process::exit(1);
                }
            };
            let summary = runner.run(&registry);
            print_summary(&summary, runner.config().verbose);
            std::process::exit(summary.exit_code());
        }
    }
}

/// One line per case, then the totals.
fn print_summary(summary: &Summary, verbose: bool) {
    for result in &summary.results {
        match &result.outcome {
            CaseOutcome::Passed if verbose => {
                println!("  PASS: {} ({:.2?})", result.name, result.duration);
            }
            CaseOutcome::Passed => println!("  PASS: {}", result.name),
            CaseOutcome::Failed(msg) => println!("  FAIL: {} - {}", result.name, msg),
        }
    }

    println!();
    println!("Test Summary:");
    println!(
        "  {} passed, {} failed ({} total)",
        summary.passed,
        summary.failed,
        summary.total()
    );
    println!("  Completed in {:.2?}", summary.duration);

    println!();
    if summary.has_failures() {
        println!("FAILED");
    } else if summary.total() == 0 {
        println!("NO CASES MATCHED");
    } else {
        println!("OK");
    }
}
