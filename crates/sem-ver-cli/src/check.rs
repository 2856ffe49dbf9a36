//! Check command - validate versions and report a pass/fail tally.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sem_ver::{FormatError, Version};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Versions to validate
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,

    /// Only print the final tally
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    passes: usize,
    failures: usize,
}

impl Tally {
    fn record(&mut self, result: &Result<Version, FormatError>) {
        match result {
            Ok(_) => self.passes += 1,
            Err(_) => self.failures += 1,
        }
    }
}

pub fn execute(args: CheckArgs) -> Result<i32> {
    let mut tally = Tally::default();

    for input in &args.versions {
        let result = Version::parse(input);
        tally.record(&result);
        if args.quiet {
            continue;
        }
        match result {
            Ok(_) => println!("  {}: \"{}\"", "PASS".green(), input),
            Err(err) => println!("* {}: \"{}\" {}", "FAIL".red(), input, err.kind()),
        }
    }

    println!("{} passes, {} failures", tally.passes, tally.failures);
    Ok(if tally.failures > 0 { 1 } else { 0 })
}
