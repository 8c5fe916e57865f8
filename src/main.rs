//! evgen CLI - Command-line interface
//!
//! Commands:
//!   generate - Generate event test files from a component API document
//!   check    - Validate a component API document
//!   schema   - Print JSON schema for inputs

mod cli;

use evgen::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "generate" | "gen" => cli::cmd_generate(&args[2..]),
        "check" => cli::cmd_check(&args[2..]),
        "schema" => cli::cmd_schema(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("evgen {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"
evgen - Event-case test generation for Vue and React components

USAGE:
    evgen <COMMAND> [OPTIONS]

COMMANDS:
    generate <api.yaml|api.json>     Generate event tests
    check <api.yaml|api.json>        Validate a component API document
    schema [api|config]              Print JSON schema
    version                          Print version

OPTIONS:
    --framework, -f <name>   Vue(PC) | VueNext(PC) | React(PC) (repeatable; default from .evgen.yaml)
    --runner <vitest|jest>   Test runner (default: vitest)
    --output, -o <file>      Output file (default: stdout; single framework only)
    --out-dir, -d <dir>      Write one file per framework using the naming pattern
    --json                   JSON output (check)
    --strict                 Treat warnings as errors (check)

EXAMPLES:
    evgen generate button.yaml -f React(PC) > button.test.tsx
    evgen generate button.yaml --out-dir test/unit
    evgen check button.yaml --strict
"#
    );
}
