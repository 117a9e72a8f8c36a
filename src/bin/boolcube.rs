//! Boolcube command line interface
//!
//! Reads one JSON step array, executes it against the nine list slots
//! and writes the result object to stdout.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "boolcube")]
#[command(about = "Boolean cube list calculator", long_about = None)]
#[command(version)]
struct Args {
    /// Input JSON step file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Pretty-print the result object
    #[arg(short, long)]
    pretty: bool,
}

fn main() {
    let args = Args::parse();

    let text = match fs::read_to_string(&args.input) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error reading '{}': {}", args.input.display(), err);
            process::exit(1);
        }
    };

    let output = match boolcube::run_script(&text) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    };
    match rendered {
        Ok(text) => println!("{}", text),
        Err(err) => {
            eprintln!("Error writing JSON output: {}", err);
            process::exit(1);
        }
    }
}
