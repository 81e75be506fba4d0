use crate::error::{CheckError, Result};
use crate::types::ServiceEndpoint;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The services file: a top-level YAML sequence of `{host, port}` mappings.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(transparent)]
pub struct Config {
    pub services: Vec<ServiceEndpoint>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = absolute_path(path.as_ref())?;
        let contents = std::fs::read_to_string(&path).map_err(|source| CheckError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "read services file");
        Self::from_yaml(&contents).map_err(|source| CheckError::ConfigParse { path, source })
    }

    pub fn from_yaml(contents: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if has_no_documents(contents) {
            return Ok(Self::default());
        }
        // `null` / `~` decode as no services
        serde_yaml::from_str::<Option<Self>>(contents).map(Option::unwrap_or_default)
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Vec<ServiceEndpoint>> {
    Ok(Config::from_file(path)?.services)
}

fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|source| CheckError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })
}

// blank or comment-only
fn has_no_documents(contents: &str) -> bool {
    contents.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}
