//! Compare and test commands - precedence between two versions.

use anyhow::{Context, Result};
use clap::Args;
use sem_ver::{Comparator, Operator, Version};
use std::cmp::Ordering;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    #[arg(value_name = "A")]
    pub lhs: String,

    /// Right-hand version
    #[arg(value_name = "B")]
    pub rhs: String,
}

#[derive(Args, Debug)]
pub struct TestArgs {
    /// Left-hand version
    #[arg(value_name = "A")]
    pub lhs: String,

    /// One of =, ==, !=, <>, <, <=, >, >=
    #[arg(value_name = "OP")]
    pub operator: String,

    /// Right-hand version
    #[arg(value_name = "B")]
    pub rhs: String,

    /// Print nothing, only set the exit status
    #[arg(short, long)]
    pub quiet: bool,
}

fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    }
}

pub fn execute(args: CompareArgs) -> Result<i32> {
    let lhs = Version::parse(&args.lhs)?;
    let rhs = Version::parse(&args.rhs)?;
    println!("{} {} {}", lhs, ordering_symbol(lhs.cmp(&rhs)), rhs);
    Ok(0)
}

pub fn execute_test(args: TestArgs) -> Result<i32> {
    let operator: Operator = args
        .operator
        .parse()
        .with_context(|| format!("Supported operators: {}", Operator::supported_operators().join(" ")))?;
    let result = Comparator::compare(&args.lhs, operator, &args.rhs)?;
    log::debug!("{} {} {} => {}", args.lhs, operator, args.rhs, result);

    if !args.quiet {
        println!("{}", result);
    }
    Ok(if result { 0 } else { 1 })
}
