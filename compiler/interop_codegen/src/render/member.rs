//! Member functions: resolved pointer holders and forwarding methods.

use interop_ir::StructDescriptor;

use super::emit_null_check;
use crate::naming::{
    address_id, call_arguments, function_pointer_type, method_header, return_prefix,
};
use crate::CodegenContext;

pub fn emit_member_functions(ctx: &mut CodegenContext<'_>, desc: &StructDescriptor) {
    if desc.member_functions.is_empty() {
        return;
    }

    ctx.item_separator();
    ctx.open_scope("public unsafe static class MemberFunctionPointers");
    for function in &desc.member_functions {
        let pointer_type =
            function_pointer_type(desc, &function.method, !function.method.is_static);
        ctx.writeln(&format!(
            "public static {pointer_type} {name} => ({pointer_type})Addresses.{name}.Value;",
            name = function.method.name
        ));
    }
    ctx.close_scope();

    for function in &desc.member_functions {
        let method = &function.method;
        let holder = format!("MemberFunctionPointers.{}", method.name);
        let pattern = ctx.addresses.pattern(&method.name).to_string();

        ctx.item_separator();
        ctx.open_scope(&method_header(method));
        emit_null_check(ctx, &holder, &address_id(desc, &method.name), &pattern);
        ctx.writeln(&format!(
            "{}{holder}({});",
            return_prefix(method),
            call_arguments(desc, method, !method.is_static)
        ));
        ctx.close_scope();
    }
}
