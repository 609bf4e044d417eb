use std::env;
use std::error::Error;
use std::io;

use anyhow::bail;
use clap::Parser;
use serde::Serialize;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use descents::descents::{count_permutations_by_descents, parse_size};
use descents::display::DisplaySlice;
use descents::eulerian::eulerian_numbers;
use descents::factorial::{Factorial, Lookup};
use descents::histogram::Histogram;
use descents::print::tabulate;
use descents::timed::Timed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Format {
    Lines,
    Csv,
    Table,
    Json,
}

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// size of the permutations to enumerate
    #[clap(allow_hyphen_values = true)]
    n: String,

    /// how to print the histogram
    #[clap(short = 'f', long, value_enum, default_value_t = Format::Lines)]
    format: Format,

    /// cross-check the histogram against the Eulerian numbers
    #[clap(long)]
    verify: bool,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    size: usize,
    counts: &'a Histogram,
    total: u128,
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = Args::parse();
    debug!("args: {args:?}");
    let size = parse_size(&args.n)?;

    let histogram = Timed::result(|| count_permutations_by_descents(size))?;
    info!(
        "counted permutations of size {size} in {:.3}s",
        histogram.elapsed.as_secs_f64()
    );
    let histogram = histogram.value;

    if args.verify {
        verify(size, &histogram)?;
        info!("verified against Eulerian numbers");
    }

    match args.format {
        Format::Lines => println!("{}", DisplaySlice::lines(&histogram)),
        Format::Csv => println!("{}", DisplaySlice::csv(&histogram)),
        Format::Table => println!("{}", Console::default().render(&tabulate(&histogram))),
        Format::Json => {
            let report = Report {
                size,
                counts: &histogram,
                total: histogram.total(),
            };
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    Ok(())
}

fn verify(size: usize, histogram: &Histogram) -> anyhow::Result<()> {
    let expected_total = Lookup::default().get(size as u8);
    if histogram.total() != expected_total {
        bail!(
            "histogram totals {}, expected {size}! = {expected_total}",
            histogram.total()
        );
    }
    let expected = eulerian_numbers(size)?;
    for (descents, (&count, &expected)) in histogram.iter().zip(&expected).enumerate() {
        if count as u128 != expected {
            bail!("{count} permutations with {descents} descents, expected {expected}");
        }
    }
    Ok(())
}
