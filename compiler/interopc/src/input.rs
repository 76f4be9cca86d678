//! Descriptor and configuration documents.

use std::fs;
use std::path::Path;

use interop_codegen::CodegenConfig;
use interop_ir::StructDescriptor;
use serde::Deserialize;

use crate::DriverError;

/// Top-level shape of a descriptor document: `{ "structs": [...] }`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DescriptorDocument {
    #[serde(default)]
    pub structs: Vec<StructDescriptor>,
}

fn read(path: &Path) -> Result<String, DriverError> {
    fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a descriptor document.
pub fn parse_descriptors(path: &Path, text: &str) -> Result<Vec<StructDescriptor>, DriverError> {
    let document: DescriptorDocument =
        serde_json::from_str(text).map_err(|source| DriverError::Descriptors {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(document.structs)
}

/// Load the struct descriptors of a batch.
pub fn load_descriptors(path: &Path) -> Result<Vec<StructDescriptor>, DriverError> {
    let structs = parse_descriptors(path, &read(path)?)?;
    tracing::debug!(path = %path.display(), count = structs.len(), "descriptors loaded");
    Ok(structs)
}

/// Load a configuration document. Missing keys keep their defaults.
pub fn load_config(path: &Path) -> Result<CodegenConfig, DriverError> {
    serde_json::from_str(&read(path)?).map_err(|source| DriverError::Config {
        path: path.to_path_buf(),
        source,
    })
}
