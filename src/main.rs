use buildinfo_checker::{cli::Cli, logger, runner};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let result = runner::run_cli(&cli).await;
    if let Err(e) = &result {
        tracing::debug!(error = ?e, "version check aborted");
        println!("FAIL: {:#}", e);
    }
    ExitCode::from(runner::exit_code(&result))
}
