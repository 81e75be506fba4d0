use clap::Parser;
use std::path::PathBuf;

// No `version` attribute: `--version` carries the expected build version.
#[derive(Parser, Debug)]
#[command(name = "buildinfo-checker")]
#[command(about = "Check that services report an expected version on /build-info")]
pub struct Cli {
    /// Expected version number to check for in the /build-info endpoint
    #[arg(long, value_name = "VERSION", alias = "versionToCheck")]
    pub version: String,

    /// YAML file with the host and port of each service to check
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
