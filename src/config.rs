use crate::cli::Cli;
use std::env;
use std::path::PathBuf;

/// Resolved, immutable settings for a single padding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub suffix: String,
    pub source: PathBuf,
    pub threshold: u64,
    pub dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unable to determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

impl TryFrom<Cli> for Configuration {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let dir = match cli.dir {
            Some(dir) => dir,
            None => env::current_dir().map_err(ConfigError::CurrentDir)?,
        };
        Ok(Configuration {
            suffix: cli.suffix,
            source: cli.file1,
            threshold: cli.size,
            dir,
        })
    }
}
