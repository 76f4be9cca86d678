//! Batch compilation.
//!
//! Compiles every struct (in parallel unless disabled), then renders the
//! batch-level artifacts from the structs that compiled:
//!
//! ```text
//! [StructDescriptor]
//!        ↓  StructCompiler (rayon)
//! per-struct artifacts + errors
//!        ↓
//! <ns>.Addresses.g.cs (registration)   <ns>.FixedSizeArrays.g.cs (inline arrays)
//! ```
//!
//! Batch artifacts are named after the generated namespace, so a struct can
//! only collide with them by declaring the same qualified type. Every file
//! name is issued once; a struct whose name is already taken is reported as
//! [`CodegenError::DuplicateArtifact`].

use interop_ir::StructDescriptor;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::registration::render_registration;
use crate::render::{render_fixed_array_types, FixedArraySizes};
use crate::{CancellationToken, CodegenConfig, CodegenError, StructCompiler};

/// Type name of the registration artifact.
pub const REGISTRATION_NAME: &str = "Addresses";

/// Base name of the inline-array types artifact.
pub const FIXED_ARRAY_TYPES_NAME: &str = "FixedSizeArrays";

/// One generated source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// Suggested file name.
    pub hint_name: String,
    pub source: String,
}

impl Artifact {
    pub fn new(hint_name: impl Into<String>, source: String) -> Self {
        Self {
            hint_name: hint_name.into(),
            source,
        }
    }

    /// File name of a struct artifact, e.g. `Game.UI.Foo.g.cs`.
    pub fn struct_hint(desc: &StructDescriptor) -> String {
        format!("{}.g.cs", desc.qualified_name())
    }

    /// File name of a batch artifact inside the generated namespace, e.g.
    /// `Interop.Generated.Addresses.g.cs`.
    pub fn batch_hint(config: &CodegenConfig, name: &str) -> String {
        if config.generated_namespace.is_empty() {
            format!("{name}.g.cs")
        } else {
            format!("{}.{name}.g.cs", config.generated_namespace)
        }
    }
}

/// Result of compiling a batch.
#[derive(Clone, Debug)]
pub struct BatchOutput {
    /// One artifact per successfully compiled struct, in input order.
    pub structs: Vec<Artifact>,
    pub registration: Artifact,
    pub fixed_array_types: Artifact,
    /// Structs that failed; they contribute nothing to the other artifacts.
    pub errors: Vec<CodegenError>,
}

impl BatchOutput {
    /// All artifacts: structs first, then registration and inline arrays.
    pub fn artifacts(&self) -> impl Iterator<Item = &Artifact> {
        self.structs
            .iter()
            .chain([&self.registration, &self.fixed_array_types])
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Compile a batch of structs.
///
/// Malformed structs are reported in [`BatchOutput::errors`]; cancellation
/// aborts the whole batch with [`CodegenError::Cancelled`].
#[tracing::instrument(level = "debug", skip_all, fields(count = structs.len()))]
pub fn compile_batch(
    structs: &[StructDescriptor],
    config: &CodegenConfig,
    cancel: &CancellationToken,
) -> Result<BatchOutput, CodegenError> {
    let compiler = StructCompiler::new(config, cancel);
    let compile = |desc: &StructDescriptor| {
        compiler.compile(desc).map(|source| {
            let mut sizes = FixedArraySizes::new();
            sizes.record(desc);
            (source, sizes)
        })
    };
    let results: Vec<_> = if config.parallel {
        structs.par_iter().map(compile).collect()
    } else {
        structs.iter().map(compile).collect()
    };
    cancel.check()?;

    let registration_hint = Artifact::batch_hint(config, REGISTRATION_NAME);
    let fixed_array_types_hint = Artifact::batch_hint(config, FIXED_ARRAY_TYPES_NAME);
    let mut hints: FxHashSet<String> =
        [registration_hint.clone(), fixed_array_types_hint.clone()].into_iter().collect();

    let mut artifacts = Vec::with_capacity(structs.len());
    let mut compiled = Vec::with_capacity(structs.len());
    let mut sizes = FixedArraySizes::new();
    let mut errors = Vec::new();

    for (desc, result) in structs.iter().zip(results) {
        let error = match result {
            Ok((source, struct_sizes)) => {
                let hint_name = Artifact::struct_hint(desc);
                if hints.insert(hint_name.clone()) {
                    sizes.merge(&struct_sizes);
                    compiled.push(desc);
                    artifacts.push(Artifact::new(hint_name, source));
                    continue;
                }
                CodegenError::DuplicateArtifact { hint_name }
            }
            Err(e) if e.is_cancellation() => return Err(e),
            Err(e) => e,
        };
        tracing::warn!(name = %desc.qualified_name(), error = %error, "struct skipped");
        errors.push(error);
    }

    let registration = Artifact::new(registration_hint, render_registration(&compiled, config));
    cancel.check()?;
    let fixed_array_types = Artifact::new(
        fixed_array_types_hint,
        render_fixed_array_types(&sizes, config),
    );
    cancel.check()?;

    tracing::debug!(
        compiled = artifacts.len(),
        failed = errors.len(),
        array_sizes = sizes.len(),
        "batch compiled"
    );

    Ok(BatchOutput {
        structs: artifacts,
        registration,
        fixed_array_types,
        errors,
    })
}
