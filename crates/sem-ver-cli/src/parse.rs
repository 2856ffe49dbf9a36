//! Parse command - print the components of versions.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sem_ver::Version;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Versions to parse
    #[arg(value_name = "VERSION", required = true)]
    pub versions: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug, PartialEq)]
struct Components<'a> {
    version: &'a Version,
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Option<Vec<&'a str>>,
    build: Option<Vec<&'a str>>,
}

impl<'a> From<&'a Version> for Components<'a> {
    fn from(version: &'a Version) -> Self {
        Components {
            version,
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            prerelease: version
                .prerelease()
                .map(|p| p.identifiers().map(|id| id.as_str()).collect()),
            build: version.build().map(|b| b.identifiers().collect()),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
enum Report<'a> {
    Valid(Components<'a>),
    Invalid { version: &'a str, error: String },
}

fn render_text(version: &Version) -> String {
    let mut out = format!(
        "{}\n  major:      {}\n  minor:      {}\n  patch:      {}\n",
        version,
        version.major(),
        version.minor(),
        version.patch()
    );
    if let Some(prerelease) = version.prerelease() {
        out.push_str(&format!("  prerelease: {}\n", prerelease));
    }
    if let Some(build) = version.build() {
        out.push_str(&format!("  build:      {}\n", build));
    }
    out
}

pub fn execute(args: ParseArgs) -> Result<i32> {
    let parsed: Vec<(&str, Result<Version, sem_ver::FormatError>)> = args
        .versions
        .iter()
        .map(|v| (v.as_str(), Version::parse(v)))
        .collect();
    let failures = parsed.iter().filter(|(_, r)| r.is_err()).count();

    if args.json {
        let reports: Vec<Report> = parsed
            .iter()
            .map(|(input, result)| match result {
                Ok(version) => Report::Valid(Components::from(version)),
                Err(err) => Report::Invalid {
                    version: *input,
                    error: err.to_string(),
                },
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for (_, result) in &parsed {
            match result {
                Ok(version) => print!("{}", render_text(version)),
                Err(err) => eprintln!("{} {}", "error:".red().bold(), err),
            }
        }
    }

    Ok(if failures > 0 { 1 } else { 0 })
}
