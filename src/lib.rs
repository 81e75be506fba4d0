pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod runner;
pub mod types;

pub use config::load_config;
pub use error::{CheckError, Result};
pub use runner::{Runner, VersionChecker};
pub use types::{BuildInfo, CheckOutcome, RunReport, ServiceEndpoint};
