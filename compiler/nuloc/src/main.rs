//! Nulo CLI
//!
//! Scans Nulo source files and prints their token streams.

use nuloc::commands::{lex_file, LexOptions};
use nuloc::{init_tracing, DriverError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: nulo lex <file.nulo> [--offsets]");
                std::process::exit(1);
            }
            run_lex(&args[2..]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Nulo {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a source file, lex it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("nulo"))
            {
                run_lex(&args[1..]);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn run_lex(args: &[String]) {
    let result = LexOptions::parse(args)
        .map_err(DriverError::from)
        .and_then(|options| lex_file(&options).map_err(DriverError::from));

    match result {
        Ok(listing) => print!("{listing}"),
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, DriverError::Cli(_)) {
                eprintln!("Usage: nulo lex <file.nulo> [--offsets]");
            }
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Nulo toolchain");
    println!();
    println!("Usage: nulo <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.nulo>      Tokenize and display tokens");
    println!("  <file.nulo>          Shorthand for `lex <file.nulo>`");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --offsets            Show the byte offset of each token");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=nulo_lexer_core=trace   Trace every scanned token");
}
