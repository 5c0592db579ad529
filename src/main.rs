use std::io::{self, Write};

use clap::Parser;

use coinbench::{bench, report};

#[derive(Parser, Debug)]
#[clap(name = "coinbench")]
#[clap(about = "Benchmarks greedy vs dynamic-programming coin change", long_about = None)]
struct Cli {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    // No flags beyond --help/--version; parsing still rejects stray arguments.
    let _args = Cli::parse();

    let results = bench::run(&bench::AMOUNTS)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &results)?;
    out.flush()?;
    Ok(())
}
