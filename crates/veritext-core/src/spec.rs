//! Specification loading: the flat list of required-text records.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::CoreError;
use crate::model::SpecificationRecord;

#[derive(Deserialize)]
struct SpecificationFile {
    #[serde(default)]
    specifications: Vec<SpecificationRecord>,
}

/// Parse a specification document: `{"specifications": [...]}`.
///
/// Record order is preserved; absent fields default to empty. An undecodable
/// document is [`CoreError::MalformedInput`].
pub fn load_from_str(raw: &str) -> Result<Vec<SpecificationRecord>, CoreError> {
    let file: SpecificationFile = serde_json::from_str(raw)?;
    Ok(file.specifications)
}

/// Load specification records from a file.
///
/// An absent or unreadable file is [`CoreError::SourceUnavailable`]; callers
/// may treat that as non-fatal and proceed with zero records.
pub fn load_from_file(path: &Path) -> Result<Vec<SpecificationRecord>, CoreError> {
    let raw = fs::read_to_string(path).map_err(|source| CoreError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let records = load_from_str(&raw)?;
    info!(count = records.len(), path = %path.display(), "loaded specification records");
    Ok(records)
}
