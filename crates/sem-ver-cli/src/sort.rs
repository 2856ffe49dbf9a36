use anyhow::Result;
use clap::Args;
use sem_ver::Semver;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,
}

pub fn execute(args: SortArgs) -> Result<i32> {
    for version in args.versions.iter().filter(|v| !Semver::is_valid(v)) {
        log::warn!("Ignoring invalid version \"{}\"", version);
    }

    let versions: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    let sorted = if args.reverse {
        Semver::rsort(&versions)
    } else {
        Semver::sort(&versions)
    };

    for version in sorted {
        println!("{}", version);
    }
    Ok(0)
}
