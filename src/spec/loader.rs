use crate::SpecDocument;
use std::fs;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a specification document
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("failed to read specification file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse specification: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Parse a workflow specification from YAML text
///
/// Keys not present in the document model are ignored, so specifications
/// carrying additional sections (inputs, outputs, step resources) still
/// deserialize as long as the workflow step list is well formed.
pub fn parse_spec(content: &str) -> Result<SpecDocument, SpecError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Load a workflow specification from a YAML file
///
/// # Arguments
/// * `path` - Path to the specification file
///
/// # Returns
/// * `Ok(SpecDocument)` if the file was read and parsed successfully
/// * `Err(SpecError)` if the file couldn't be read or is not valid YAML
pub fn load_spec(path: &str) -> Result<SpecDocument, SpecError> {
    debug!("Loading specification from {}", path);

    let content = fs::read_to_string(path).map_err(|source| SpecError::Io {
        path: path.to_string(),
        source,
    })?;

    parse_spec(&content)
}
