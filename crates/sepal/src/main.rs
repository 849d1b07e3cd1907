//! Sepal - typed CSS property values
//!
//! Usage: sepal "<property>: <value>; ..."

use std::env;
use std::process::ExitCode;

use log::debug;

use sepal_style::{initial_value, parse_value, PROPERTY_NAMES};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        return ExitCode::FAILURE;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_usage(&args[0]);
            ExitCode::SUCCESS
        }
        "--version" | "-V" => {
            println!("Sepal {}", VERSION);
            ExitCode::SUCCESS
        }
        "--list" => {
            list_properties();
            ExitCode::SUCCESS
        }
        "--demo" => {
            if canonicalize(DEMO_DECLARATIONS) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        _ => {
            let declarations = args[1..].join(" ");
            if canonicalize(&declarations) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn print_usage(program: &str) {
    println!(
        r#"Sepal {} - typed CSS property values

USAGE:
    {} [OPTIONS] "<property>: <value>; ..."

OPTIONS:
    -h, --help      Print this help message
    -V, --version   Print version information
    --list          Print every registered property with its default value
    --demo          Canonicalize a built-in set of declarations

EXAMPLES:
    {} "margin: 25PX 25px; border: solid RED thick"
    {} "cursor: url(pointer.png) 3 4, move"

"#,
        VERSION, program, program, program
    );
}

/// Print every registered property in `name: default` form
fn list_properties() {
    for name in PROPERTY_NAMES {
        if let Some(value) = initial_value(name) {
            println!("{}", value);
        }
    }
}

/// Parse `name: value` declarations and print them back in canonical form
fn canonicalize(input: &str) -> bool {
    debug!("canonicalizing {} bytes of declarations", input.len());
    let mut ok = true;

    for declaration in input.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }
        match declaration.split_once(':') {
            Some((name, text)) => match parse_value(name, text) {
                Some(Ok(value)) => println!("{}", value),
                Some(Err(e)) => {
                    eprintln!("{}", e);
                    ok = false;
                }
                None => {
                    eprintln!("unknown property '{}'", name.trim());
                    ok = false;
                }
            },
            None => {
                eprintln!("expected 'property: value', got '{}'", declaration);
                ok = false;
            }
        }
    }
    ok
}

/// Declarations exercised by `--demo`
const DEMO_DECLARATIONS: &str = "\
    margin: 25PX 25px; \
    padding: 1px 2px 3px 4px; \
    border: solid RED thick; \
    outline: inherit; \
    flex: 25px; \
    columns: 2 10em; \
    column-rule: thin dotted #AABBCC; \
    background-image: url('a.png') , url(b.png); \
    cursor: url(pointer.png) 3 4, move; \
    opacity: 1";
