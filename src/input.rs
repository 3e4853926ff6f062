//! Input documents: pre-extracted functions in JSON.

use crate::error::{Error, Result};
use crate::model::SourceDocument;
use std::fs;
use std::path::Path;

pub fn parse(content: &str, origin: &str) -> Result<SourceDocument> {
    serde_json::from_str(content).map_err(|source| Error::Json {
        what: "input document",
        origin: origin.to_string(),
        source,
    })
}

pub fn load(path: &Path) -> Result<SourceDocument> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, &path.display().to_string())
}

/// Serialize a (possibly fixed) document back to pretty JSON.
pub fn to_json(doc: &SourceDocument) -> Result<String> {
    let mut out = serde_json::to_string_pretty(doc).map_err(|source| Error::Serialize {
        what: "document",
        source,
    })?;
    out.push('\n');
    Ok(out)
}
