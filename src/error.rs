use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of a check run. A version mismatch is not one of these;
/// it is reported through [`crate::types::CheckOutcome`].
///
/// Messages carry only their own context; the underlying error is exposed
/// through `source()`.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("error reading config file {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error parsing config file {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("unable to get to the /build-info endpoint at {url}")]
    Network { url: String, source: reqwest::Error },

    #[error("unable to read the response from {url}")]
    ResponseRead { url: String, source: reqwest::Error },

    #[error("unable to decode build info from {url}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CheckError>;
