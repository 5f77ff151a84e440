use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use bid_sort::load::Loader;
use bid_sort::shell::Shell;

#[derive(Parser)]
#[command(name = "bid-sort")]
#[command(about = "Load bids from a CSV file and compare sort algorithms by title")]
struct Args {
    /// Path to the bids file
    #[arg(default_value = "eBid_Monthly_Sales_Dec_2016.csv")]
    csv_path: PathBuf,

    /// Log every loaded bid and every sort
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init()?;

    let mut shell = Shell::new(Loader::new(args.csv_path));
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell.run(stdin.lock(), &mut stdout)
}
