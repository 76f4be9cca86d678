//! The `generate` and `encode` commands.

use std::fs;
use std::path::PathBuf;

use interop_codegen::naming::hex_word;
use interop_codegen::{compile_batch, encode, CancellationToken, CodegenError};
use interop_ir::SignatureDescriptor;

use crate::input::load_descriptors;
use crate::options::{EncodeOptions, GenerateOptions};
use crate::DriverError;

/// What a `generate` run produced.
#[derive(Debug)]
pub struct GenerateSummary {
    /// Paths of the artifacts written, structs first.
    pub written: Vec<PathBuf>,
    /// Structs that were skipped.
    pub errors: Vec<CodegenError>,
}

impl GenerateSummary {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Compile a descriptor document and write every artifact to the output
/// directory. Structs that fail to compile are reported in the summary; the
/// rest of the batch is still written.
pub fn generate(
    options: &GenerateOptions,
    cancel: &CancellationToken,
) -> Result<GenerateSummary, DriverError> {
    let config = options.resolve_config()?;
    let structs = load_descriptors(&options.input)?;
    let batch = compile_batch(&structs, &config, cancel)?;

    fs::create_dir_all(&options.output).map_err(|source| DriverError::Write {
        path: options.output.clone(),
        source,
    })?;

    let mut written = Vec::new();
    for artifact in batch.artifacts() {
        let path = options.output.join(&artifact.hint_name);
        fs::write(&path, &artifact.source).map_err(|source| DriverError::Write {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    tracing::info!(
        structs = structs.len(),
        written = written.len(),
        failed = batch.errors.len(),
        output = %options.output.display(),
        "generation finished"
    );

    Ok(GenerateSummary {
        written,
        errors: batch.errors,
    })
}

/// Encode one signature and describe its packed form.
pub fn describe_signature(options: &EncodeOptions) -> Result<String, DriverError> {
    let signature = SignatureDescriptor::new(options.pattern.as_str())
        .with_relocation_offsets(options.relocation_offsets.clone());
    let encoded = encode(&signature)?;

    let words = |words: &[u64]| words.iter().map(|&w| hex_word(w)).collect::<Vec<_>>().join(" ");
    let offsets = encoded
        .relocation_offsets
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    Ok(format!(
        "pattern:     {}\nsignature:   {}\nmask:        {}\nrelocations: {offsets}\n",
        encoded.padded,
        words(&encoded.signature_words),
        words(&encoded.mask_words),
    ))
}
