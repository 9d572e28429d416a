use std::fs;

use clap::Parser;
use minilang::{
    graph::statement_to_dot,
    session::{LineStatus, run_report},
};

/// minilang is an easy to use, statically checked scripting language for
/// integer and string arithmetic.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minilang to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the tokens, syntax trees and status of every line while
    /// running.
    #[arg(short, long)]
    trace: bool,

    /// Prints a Graphviz DOT graph for every parsed statement.
    #[arg(short, long)]
    dot: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let (reports, session) = run_report(&script);

    for report in &reports {
        if args.trace {
            println!("Line {}: {}", report.number, report.source);
            println!("  Tokens: {:?}", report.tokens);
            println!("  AST: {:?}", report.statements);
            println!("  Status: {}", report.status);
        } else if let LineStatus::Error(message) = &report.status {
            eprintln!("Line {}: {message}", report.number);
        }

        if args.dot {
            for statement in &report.statements {
                println!("{}", statement_to_dot(statement));
            }
        }
    }

    println!("Final Environment:");
    for (name, value) in session.environment().bindings() {
        println!("  {name} = {value}");
    }
}
