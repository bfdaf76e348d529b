use crate::constants::EMPTY_SOURCE_MESSAGE;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Bytes of the source file, read once and appended to every target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{}", EMPTY_SOURCE_MESSAGE)]
    Empty,
}

impl Payload {
    /// Load the whole source file, rejecting an empty one.
    pub fn load(path: &Path) -> Result<Self, PayloadError> {
        let bytes = fs::read(path).map_err(|source| PayloadError::Read {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), len = bytes.len(), "loaded payload");
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, PayloadError> {
        if bytes.is_empty() {
            return Err(PayloadError::Empty);
        }
        Ok(Payload { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size in bytes; always non-zero.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
