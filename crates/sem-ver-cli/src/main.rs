mod check;
mod compare;
mod parse;
mod sort;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "sem-ver")]
#[command(about = "Parse, validate and compare semantic versions")]
#[command(version)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the components of one or more versions
    Parse(parse::ParseArgs),

    /// Print the precedence relation between two versions
    Compare(compare::CompareArgs),

    /// Evaluate `A OP B`; exit status 0 when true, 1 when false
    Test(compare::TestArgs),

    /// Sort versions by precedence
    Sort(sort::SortArgs),

    /// Validate versions and print a pass/fail tally
    Check(check::CheckArgs),
}

fn init_logger(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();

    init_logger(args.verbose);
    if args.no_color {
        colored::control::set_override(false);
    }
    log::debug!("{:?}", args.command);

    match args.command {
        Commands::Parse(args) => parse::execute(args),
        Commands::Compare(args) => compare::execute(args),
        Commands::Test(args) => compare::execute_test(args),
        Commands::Sort(args) => sort::execute(args),
        Commands::Check(args) => check::execute(args),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let args = Args::try_parse_from(["sem-ver", "-vv", "test", "1.0.0", "<", "2.0.0"]).unwrap();
        assert_eq!(args.verbose, 2);
        match args.command {
            Commands::Test(test) => {
                assert_eq!(test.lhs, "1.0.0");
                assert_eq!(test.operator, "<");
                assert_eq!(test.rhs, "2.0.0");
            }
            other => panic!("unexpected command {:?}", other),
        }

        let args = Args::try_parse_from(["sem-ver", "sort", "--reverse", "1.0.0", "2.0.0"]).unwrap();
        match args.command {
            Commands::Sort(sort) => {
                assert!(sort.reverse);
                assert_eq!(sort.versions, vec!["1.0.0", "2.0.0"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_missing_arguments() {
        assert!(Args::try_parse_from(["sem-ver"]).is_err());
        assert!(Args::try_parse_from(["sem-ver", "compare", "1.0.0"]).is_err());
        assert!(Args::try_parse_from(["sem-ver", "parse"]).is_err());
    }
}
