use serde::Deserialize;

/// One service instance to probe, as listed in the config file.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceEndpoint {
    #[serde(rename = "host")]
    pub hostname: String,
    pub port: u16,
}

impl ServiceEndpoint {
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            port,
        }
    }

    pub fn build_info_url(&self) -> String {
        format!("http://{}:{}/build-info", self.hostname, self.port)
    }
}

/// Body of a `/build-info` response. Absent keys decode as empty strings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildInfo {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub succeeded: bool,
    pub message: String,
    pub url: String,
    pub found_version: String,
}

impl CheckOutcome {
    pub fn compare(url: String, build_info: BuildInfo, expected: &str) -> Self {
        if build_info.version == expected {
            Self {
                succeeded: true,
                message: "Success".to_string(),
                url,
                found_version: build_info.version,
            }
        } else {
            Self {
                succeeded: false,
                message: format!(
                    "Expected: {}, but found: {}",
                    expected, build_info.version
                ),
                url,
                found_version: build_info.version,
            }
        }
    }
}

/// Outcomes of one run, in config order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub results: Vec<(ServiceEndpoint, CheckOutcome)>,
}

impl RunReport {
    pub fn push(&mut self, endpoint: ServiceEndpoint, outcome: CheckOutcome) {
        self.results.push((endpoint, outcome));
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|(_, o)| o.succeeded).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &(ServiceEndpoint, CheckOutcome)> {
        self.results.iter().filter(|(_, o)| !o.succeeded)
    }

    /// True only when at least one endpoint was checked and all of them matched.
    pub fn succeeded(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(|(_, o)| o.succeeded)
    }
}
