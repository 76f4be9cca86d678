//! Delegate types matching each native call shape.

use interop_ir::{MethodInfo, StructDescriptor};

use crate::naming::{this_pointer_type, INTEROP_SERVICES, THIS_PARAMETER};
use crate::CodegenContext;

pub fn emit_delegates(ctx: &mut CodegenContext<'_>, desc: &StructDescriptor) {
    if desc.member_functions.is_empty() && desc.virtual_functions.is_empty() {
        return;
    }

    ctx.item_separator();
    ctx.open_scope("public static class Delegates");
    for function in &desc.member_functions {
        emit_delegate(ctx, desc, &function.method, !function.method.is_static);
    }
    for function in &desc.virtual_functions {
        emit_delegate(ctx, desc, &function.method, true);
    }
    ctx.close_scope();
}

fn emit_delegate(
    ctx: &mut CodegenContext<'_>,
    desc: &StructDescriptor,
    method: &MethodInfo,
    instance: bool,
) {
    // Native bool is one byte; the default delegate marshalling is four.
    if method.returns_bool() {
        ctx.writeln(&format!(
            "[return: {INTEROP_SERVICES}.MarshalAsAttribute({INTEROP_SERVICES}.UnmanagedType.U1)]"
        ));
    }

    let mut parameters = Vec::with_capacity(method.parameters.len() + 1);
    if instance {
        parameters.push(format!("{} {THIS_PARAMETER}", this_pointer_type(desc)));
    }
    parameters.extend(method.parameters.iter().map(|p| format!("{} {}", p.ty, p.name)));

    ctx.writeln(&format!(
        "public delegate {} {}({});",
        method.return_type,
        method.name,
        parameters.join(", ")
    ));
}
