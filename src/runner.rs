use crate::cli::Cli;
use crate::config::load_config;
use crate::error::{CheckError, Result};
use crate::types::{BuildInfo, CheckOutcome, RunReport, ServiceEndpoint};
use anyhow::Context;
use std::path::Path;

/// Probes a single service's `/build-info` endpoint.
#[derive(Debug, Clone)]
pub struct VersionChecker {
    client: reqwest::Client,
}

impl VersionChecker {
    /// Uses the client's default timeouts; nothing is overridden.
    pub fn new() -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub async fn check_version(
        &self,
        endpoint: &ServiceEndpoint,
        expected_version: &str,
    ) -> Result<CheckOutcome> {
        let url = endpoint.build_info_url();
        tracing::info!("Checking {} for version {}", url, expected_version);

        let build_info = fetch_build_info(&self.client, &url).await?;
        tracing::debug!(
            group_id = %build_info.group_id,
            artifact_id = %build_info.artifact_id,
            version = %build_info.version,
            "decoded build info"
        );

        let outcome = CheckOutcome::compare(url, build_info, expected_version);
        if outcome.succeeded {
            tracing::info!(
                "Version check succeeded for {} with version {}",
                outcome.url,
                expected_version
            );
        }
        Ok(outcome)
    }
}

/// Checks every configured endpoint against one expected version.
pub struct Runner {
    checker: VersionChecker,
    expected_version: String,
}

impl Runner {
    pub fn new(checker: VersionChecker, expected_version: impl Into<String>) -> Self {
        Self {
            checker,
            expected_version: expected_version.into(),
        }
    }

    pub async fn run<P: AsRef<Path>>(&self, config_path: P) -> Result<RunReport> {
        let services = load_config(config_path)?;
        self.check_all(&services).await
    }

    /// Sequential, in config order. The first fatal error aborts the run;
    /// mismatches are collected and do not stop later checks.
    pub async fn check_all(&self, services: &[ServiceEndpoint]) -> Result<RunReport> {
        if services.is_empty() {
            tracing::warn!("no services configured");
        }

        let mut report = RunReport::default();
        for endpoint in services {
            let outcome = self
                .checker
                .check_version(endpoint, &self.expected_version)
                .await?;

            if outcome.succeeded {
                println!("{}", outcome.message);
            } else {
                println!("FAIL: {}: {}", outcome.url, outcome.message);
            }
            report.push(endpoint.clone(), outcome);
        }

        tracing::info!(
            passed = report.passed(),
            total = report.results.len(),
            "version check finished"
        );
        Ok(report)
    }
}

/// Runs one check from parsed command-line flags. `Ok(false)` means the run
/// completed but at least one service did not match, or none were configured.
pub async fn run_cli(cli: &Cli) -> anyhow::Result<bool> {
    println!("Version to check {}", cli.version);
    println!("Service file to check {}", cli.config.display());

    let checker = VersionChecker::new().context("failed to create HTTP client")?;
    let runner = Runner::new(checker, cli.version.as_str());
    let report = runner.run(&cli.config).await?;

    if report.results.is_empty() {
        println!("FAIL: no services configured in {}", cli.config.display());
        return Ok(false);
    }

    let failed = report.failures().count();
    if failed > 0 {
        println!(
            "FAIL: {} of {} services did not report the expected version",
            failed,
            report.results.len()
        );
    } else {
        println!("All {} services report the expected version", report.passed());
    }
    Ok(report.succeeded())
}

/// Process exit status for the result of [`run_cli`].
pub fn exit_code(result: &anyhow::Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) | Err(_) => 1,
    }
}

async fn fetch_build_info(client: &reqwest::Client, url: &str) -> Result<BuildInfo> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|source| CheckError::Network {
            url: url.to_string(),
            source,
        })?;

    let body = response
        .bytes()
        .await
        .map_err(|source| CheckError::ResponseRead {
            url: url.to_string(),
            source,
        })?;

    serde_json::from_slice(&body).map_err(|source| CheckError::Decode {
        url: url.to_string(),
        source,
    })
}
