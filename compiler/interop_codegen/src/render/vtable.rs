//! Virtual table block.

use interop_ir::StructDescriptor;

use crate::addresses::STATIC_VIRTUAL_TABLE;
use crate::naming::{function_pointer_type, virtual_table_type, INTEROP_SERVICES};
use crate::CodegenContext;

/// Emit the explicit-layout `<Struct>VirtualTable` type, the table pointer at
/// offset 0 of the owning struct and, with a static vtable signature, the
/// accessor reinterpreting that address as a table pointer.
pub fn emit_virtual_table(ctx: &mut CodegenContext<'_>, desc: &StructDescriptor) {
    if !desc.has_virtual_table() {
        return;
    }

    let vtable = virtual_table_type(desc);

    ctx.item_separator();
    ctx.writeln(&format!(
        "[{INTEROP_SERVICES}.StructLayoutAttribute({INTEROP_SERVICES}.LayoutKind.Explicit)]"
    ));
    ctx.open_scope(&format!("public unsafe partial struct {vtable}"));
    for function in &desc.virtual_functions {
        let offset = ctx.config.slot_offset(function.index);
        ctx.writeln(&format!(
            "[{INTEROP_SERVICES}.FieldOffsetAttribute({offset})] public {} {};",
            function_pointer_type(desc, &function.method, true),
            function.method.name
        ));
    }
    ctx.close_scope();

    ctx.item_separator();
    ctx.writeln(&format!(
        "[{INTEROP_SERVICES}.FieldOffsetAttribute(0)] public {vtable}* VirtualTable;"
    ));

    if desc.static_virtual_table.is_some() {
        ctx.item_separator();
        ctx.writeln(&format!(
            "public static {vtable}* StaticVirtualTablePointer => ({vtable}*)Addresses.{STATIC_VIRTUAL_TABLE}.Value;"
        ));
    }
}
