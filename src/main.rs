use std::fs;

use clap::Parser;
use starlight::{execute, interpreter::environment::ConsoleEnvironment, stats::LexicalStats};
use tracing_subscriber::EnvFilter;

/// starlight runs programs written in a small language with Cyrillic
/// keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as a path to a program file.
    #[arg(short, long)]
    file: bool,

    /// Prints token counts by category instead of running the program.
    #[arg(short, long)]
    stats: bool,

    contents: String,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("starlight=warn")))
                             .with_writer(std::io::stderr)
                             .with_ansi(false)
                             .init();

    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Cannot read program file '{}'.", &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if args.stats {
        println!("{}", LexicalStats::collect(&script));
        return;
    }

    let mut environment = ConsoleEnvironment::stdio();
    if let Err(e) = execute(&script, &mut environment) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
