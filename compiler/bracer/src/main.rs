//! `bracer` command-line entry point.

use std::io::IsTerminal;
use std::path::Path;

use bracer::commands::{explain_error, run_check, run_mask, Status};
use bracer::init_tracing;
use bracer::options::{parse_check_args, parse_mask_args, OptionsError, DEFAULT_EXTENSIONS};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];
    let status = match command.as_str() {
        "check" => check(&args[2..]),
        "mask" => match parse_mask_args(&args[2..]) {
            Ok(options) => run_mask(&options, &mut std::io::stdout(), &mut std::io::stderr()),
            Err(e) => usage_error(&e, "Usage: bracer mask <file> [--escape=lookbehind|forward]"),
        },
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: bracer explain <ERROR_CODE>");
                eprintln!("Example: bracer explain B0002");
                Status::Failure
            } else {
                explain_error(&args[2], &mut std::io::stdout(), &mut std::io::stderr())
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Status::Balanced
        }
        "version" | "--version" | "-V" => {
            println!("bracer {}", env!("CARGO_PKG_VERSION"));
            Status::Balanced
        }
        _ => {
            // If it looks like a source path, check it
            let path = Path::new(command);
            let is_source = path.extension().and_then(|e| e.to_str()).is_some_and(|ext| {
                DEFAULT_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            });
            if !command.starts_with('-') && (is_source || path.exists()) {
                check(&args[1..])
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                Status::Failure
            }
        }
    };

    std::process::exit(status.code());
}

fn check(args: &[String]) -> Status {
    match parse_check_args(args) {
        Ok(options) => {
            let is_tty = std::io::stderr().is_terminal();
            run_check(
                &options,
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
                is_tty,
            )
        }
        Err(e) => usage_error(&e, "Usage: bracer check <path>... [options]"),
    }
}

fn usage_error(e: &OptionsError, usage: &str) -> Status {
    eprintln!("error: {e}");
    eprintln!("{usage}");
    eprintln!("Run `bracer help` for the list of options.");
    Status::Failure
}

fn print_usage() {
    println!("bracer: find the first unbalanced bracket in JS/TS/JSX sources");
    println!();
    println!("Usage: bracer <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <path>...      Scan files and directories for delimiter balance");
    println!("  mask <file>          Print the file with strings and comments blanked");
    println!("  explain <code>       Explain an error code (e.g., B0002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!("  <file>               Shorthand for `check <file>`");
    println!();
    println!("Check options:");
    println!("  --format=<fmt>      Output: text (default), short, json");
    println!("  --color=<when>      Color: auto (default), always, never");
    println!("  --escape=<policy>   Escapes in strings: lookbehind (default), forward");
    println!("  --no-angle          Do not treat < and > as delimiters");
    println!("  --innermost         Report the innermost unclosed opener");
    println!("  --tail[=<n>]        Print the last n lines of each file (default 10)");
    println!("  --ext=<list>        Extensions for directories (default: tsx,jsx,ts,js,mjs,cjs)");
    println!("  --no-parallel       Scan files sequentially");
    println!("  -q, --quiet         Do not print OK lines");
    println!();
    println!("Exit status: 0 balanced, 1 delimiter errors, 2 usage or read errors.");
    println!("Set BRACER_LOG=debug for diagnostic logging on stderr.");
}
