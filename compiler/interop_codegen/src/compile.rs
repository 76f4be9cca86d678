//! Struct Compiler
//!
//! Composes the block renderers for one struct:
//!
//! ```text
//! header + namespace
//! unsafe partial struct Outer          (outermost enclosing type first)
//!     unsafe partial struct Inner
//!         Addresses → VirtualTable → Delegates → member functions
//!         → virtual dispatch → static addresses → string overloads
//!         → fixed arrays
//!     }
//! }
//! ```

use interop_ir::StructDescriptor;

use crate::addresses::AddressTable;
use crate::render;
use crate::{CancellationToken, CodegenConfig, CodegenContext, CodegenError};

type BlockRenderer = fn(&mut CodegenContext<'_>, &StructDescriptor);

/// Blocks in emission order.
const BLOCKS: [(&str, BlockRenderer); 8] = [
    ("addresses", render::emit_addresses),
    ("virtual_table", render::emit_virtual_table),
    ("delegates", render::emit_delegates),
    ("member_functions", render::emit_member_functions),
    ("virtual_dispatch", render::emit_virtual_dispatch),
    ("static_addresses", render::emit_static_addresses),
    ("string_overloads", render::emit_string_overloads),
    ("fixed_arrays", render::emit_fixed_arrays),
];

/// Compiles struct descriptors into binding source.
///
/// Holds only shared references, so one compiler can serve every thread of a
/// batch.
#[derive(Copy, Clone)]
pub struct StructCompiler<'a> {
    config: &'a CodegenConfig,
    cancel: &'a CancellationToken,
}

impl<'a> StructCompiler<'a> {
    pub fn new(config: &'a CodegenConfig, cancel: &'a CancellationToken) -> Self {
        Self { config, cancel }
    }

    /// Compile one struct.
    ///
    /// Every signature is encoded before the first line is written, so a
    /// malformed signature yields an error and no output. Cancellation is
    /// checked between blocks; a cancelled artifact is discarded whole.
    #[tracing::instrument(level = "debug", skip_all, fields(name = %desc.qualified_name()))]
    pub fn compile(&self, desc: &StructDescriptor) -> Result<String, CodegenError> {
        self.compile_with(desc, BLOCKS)
    }

    fn compile_with<'b, F>(
        &self,
        desc: &StructDescriptor,
        blocks: impl IntoIterator<Item = (&'b str, F)>,
    ) -> Result<String, CodegenError>
    where
        F: Fn(&mut CodegenContext<'_>, &StructDescriptor),
    {
        self.cancel.check()?;
        let addresses = AddressTable::encode(desc)?;
        tracing::trace!(count = addresses.len(), "signatures encoded");

        let mut ctx = CodegenContext::new(self.config).with_addresses(addresses);
        render::emit_file_header(&mut ctx, &desc.namespace);

        for name in desc.type_path() {
            ctx.item_separator();
            ctx.open_scope(&format!("unsafe partial struct {name}"));
        }
        self.cancel.check()?;

        for (block, emit) in blocks {
            emit(&mut ctx, desc);
            tracing::trace!(block, "block rendered");
            self.cancel.check()?;
        }

        for _ in desc.hierarchy() {
            ctx.close_scope();
        }
        debug_assert_eq!(ctx.depth(), 0, "unbalanced scopes");

        Ok(ctx.take_output())
    }
}
