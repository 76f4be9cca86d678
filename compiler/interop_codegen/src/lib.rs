//! Interop Binding Code Generation
//!
//! Turns native struct descriptors into C# binding source whose symbols are
//! resolved at runtime by scanning a loaded image for byte signatures.
//!
//! # Architecture
//!
//! ```text
//! StructDescriptor
//!        ↓
//!   AddressTable       (encode every signature up front)
//!        ↓
//!   StructCompiler     (block renderers in fixed order)
//!        ↓
//!   struct artifact
//!
//! batch: compile_batch → struct artifacts + registration + inline arrays
//! ```
//!
//! # Modules
//!
//! - [`signature`]: pattern tokenizer and word/mask packing
//! - [`render`]: one renderer per generated block
//! - [`compile`]: per-struct orchestration
//! - [`registration`]: batch-wide resolver registration
//! - [`batch`]: parallel batch compilation

pub mod addresses;
pub mod batch;
pub mod cancel;
pub mod compile;
pub mod config;
pub mod context;
pub mod error;
pub mod naming;
pub mod registration;
pub mod render;
pub mod signature;

pub use addresses::{address_entries, AddressEntry, AddressTable};
pub use batch::{compile_batch, Artifact, BatchOutput};
pub use cancel::CancellationToken;
pub use compile::StructCompiler;
pub use config::CodegenConfig;
pub use context::CodegenContext;
pub use error::{CodegenError, SignatureError};
pub use registration::render_registration;
pub use render::{render_fixed_array_types, FixedArraySizes};
pub use signature::{encode, EncodedSignature, SignatureToken};

/// Compile a single struct with the default cancellation token.
pub fn compile_struct(
    desc: &interop_ir::StructDescriptor,
    config: &CodegenConfig,
) -> Result<String, CodegenError> {
    StructCompiler::new(config, &CancellationToken::new()).compile(desc)
}
