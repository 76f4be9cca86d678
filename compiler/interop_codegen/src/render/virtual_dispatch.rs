//! Virtual function dispatch through the table pointer at offset 0.
//!
//! Unlike member functions there is no null check: an object with a live
//! virtual table pointer is assumed.

use interop_ir::StructDescriptor;

use crate::naming::{call_arguments, method_header, COMPILER_SERVICES};
use crate::CodegenContext;

pub fn emit_virtual_dispatch(ctx: &mut CodegenContext<'_>, desc: &StructDescriptor) {
    for function in &desc.virtual_functions {
        let method = &function.method;
        ctx.item_separator();
        ctx.writeln(&format!(
            "[{COMPILER_SERVICES}.MethodImplAttribute({COMPILER_SERVICES}.MethodImplOptions.AggressiveInlining)]"
        ));
        ctx.writeln(&format!(
            "{} => VirtualTable->{}({});",
            method_header(method),
            method.name,
            call_arguments(desc, method, true)
        ));
    }
}
