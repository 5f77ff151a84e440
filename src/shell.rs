use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use crate::bid::Bid;
use crate::load::Loader;
use crate::sort::Algorithm;

/// A menu choice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the current bids with the content of the input file
    Load,
    /// Print every bid
    Display,
    /// Sort the current bids in place
    Sort(Algorithm),
    Exit,
    Invalid,
}

impl Command {
    /// Parse one line of operator input
    pub fn parse(line: &str) -> Command {
        match line.trim() {
            "1" => Command::Load,
            "2" => Command::Display,
            "3" => Command::Sort(Algorithm::Selection),
            "4" => Command::Sort(Algorithm::UpgradedSelection),
            "5" => Command::Sort(Algorithm::Quick),
            "9" => Command::Exit,
            _ => Command::Invalid,
        }
    }
}

/// Interactive menu over one loaded sequence of bids.
///
/// The shell owns the bids, every command borrows them for its duration only. Loading and
/// sorting are timed, the last measurement is kept in [Shell::elapsed].
pub struct Shell {
    loader: Loader,
    bids: Vec<Bid>,
    elapsed: Option<Duration>,
}

impl Shell {
    pub fn new(loader: Loader) -> Shell {
        Shell {
            loader,
            bids: Vec::new(),
            elapsed: None,
        }
    }

    pub fn bids(&self) -> &Vec<Bid> {
        &self.bids
    }

    /// Duration of the last load or sort
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Run the menu until the operator exits or the input ends.
    ///
    /// Only a failure to read the input or write the output ends the loop with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<(), anyhow::Error> {
        let mut line = String::new();
        loop {
            Self::write_menu(output)?;
            line.clear();
            let command = if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                Command::Exit
            } else {
                Command::parse(&line)
            };
            self.execute(command, output)?;
            if command == Command::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Execute a single command
    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> Result<(), anyhow::Error> {
        match command {
            Command::Load => {
                writeln!(output, "Loading CSV file {}", self.loader.path().display())?;
                let start = Instant::now();
                let loaded = self.loader.load();
                let elapsed = start.elapsed();
                match loaded {
                    Ok(bids) => {
                        self.bids = bids;
                        self.elapsed = Some(elapsed);
                        writeln!(output, "{} bids read", self.bids.len())?;
                        Self::write_elapsed(output, elapsed)?;
                    }
                    Err(e) => {
                        log::error!("Failed to load bids: {:#}", e);
                        writeln!(output, "Failed to load bids: {:#}", e)?;
                    }
                }
            }
            Command::Display => {
                for bid in &self.bids {
                    writeln!(output, "{}", bid)?;
                }
                writeln!(output)?;
            }
            Command::Sort(algorithm) => {
                let start = Instant::now();
                algorithm.sort(&mut self.bids);
                let elapsed = start.elapsed();
                self.elapsed = Some(elapsed);
                log::info!("{} of {} bids took {:?}", algorithm, self.bids.len(), elapsed);
                writeln!(output, "{} bids sorted", self.bids.len())?;
                Self::write_elapsed(output, elapsed)?;
            }
            Command::Exit => {
                writeln!(output, "Thanks for using the program! Goodbye!")?;
            }
            Command::Invalid => {
                writeln!(output, "Please enter a correct input!")?;
            }
        }
        Ok(())
    }

    fn write_menu<W: Write>(output: &mut W) -> Result<(), anyhow::Error> {
        writeln!(output, "****************** Main Menu ******************:")?;
        writeln!(output, "  1. Load Bids")?;
        writeln!(output, "  2. Display All Bids")?;
        for (i, algorithm) in Algorithm::all().iter().enumerate() {
            writeln!(output, "  {}. {} All Bids", i + 3, algorithm)?;
        }
        writeln!(output, "  9. Exit")?;
        write!(output, "Enter choice: ")?;
        output.flush()?;
        Ok(())
    }

    fn write_elapsed<W: Write>(output: &mut W, elapsed: Duration) -> Result<(), anyhow::Error> {
        writeln!(output, "time: {} milliseconds", elapsed.as_millis())?;
        writeln!(output, "time: {:.6} seconds", elapsed.as_secs_f64())?;
        Ok(())
    }
}
