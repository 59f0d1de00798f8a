//! Magpie interpreter CLI.

use std::process::ExitCode;

use magc::commands::{check_files, eval_source, run_files};
use magc::{init_tracing, parse_args, Command, Error};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = parse_args(&args).and_then(|cli| match cli.command {
        Command::Run { files } => run_files(&files, &cli.config),
        Command::Eval { source } => eval_source(&source, &cli.config),
        Command::Check { files } => check_files(&files, &cli.config),
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Version => {
            println!("magpie {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            if matches!(error, Error::Usage(_)) {
                eprintln!();
                eprintln!("Run `magpie help` for usage.");
            }
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Magpie interpreter");
    println!();
    println!("Usage: magpie <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>...        Run programs (several files run in parallel)");
    println!("  eval '<source>'      Run a snippet");
    println!("  check <file>...      Parse only, report syntax errors");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --on-error=<policy>  After a runtime error: abort (default), continue");
    println!("  --quiet, -q          Discard program output and runtime errors");
    println!("  --trace-output       Send program output and runtime errors to tracing");
    println!("  --format=<fmt>       Syntax diagnostics as: text (default), json");
    println!("  --color=<when>       Colors: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable logging, e.g. RUST_LOG=mag_eval=debug");
    println!("  MAGPIE_LOG_TREE      Show logs as an indented span tree");
    println!();
    println!("Examples:");
    println!("  magpie run main.mg");
    println!("  magpie run a.mg b.mg --on-error=continue");
    println!("  magpie eval 'print(6 * 7)'");
    println!("  magpie check lib.mg --format=json");
}
