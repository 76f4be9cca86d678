//! Block renderers.
//!
//! Each renderer emits one category of code for one struct and emits nothing
//! when the struct has no entries of that category. The struct compiler calls
//! them in a fixed order inside the struct's nesting scopes.

mod address_block;
mod delegates;
mod fixed_array;
mod member;
mod static_address;
mod string_overloads;
mod virtual_dispatch;
mod vtable;

pub use address_block::emit_addresses;
pub use delegates::emit_delegates;
pub use fixed_array::{emit_fixed_arrays, render_fixed_array_types, FixedArraySizes};
pub use member::emit_member_functions;
pub use static_address::emit_static_addresses;
pub use string_overloads::{emit_string_overloads, STACKALLOC_THRESHOLD};
pub use virtual_dispatch::emit_virtual_dispatch;
pub use vtable::emit_virtual_table;

use crate::CodegenContext;

/// Marker line at the top of every artifact.
pub const AUTO_GENERATED_HEADER: &str = "// <auto-generated/>";

/// Emit the artifact header and the file-scoped namespace, if any.
pub fn emit_file_header(ctx: &mut CodegenContext<'_>, namespace: &str) {
    ctx.writeln(AUTO_GENERATED_HEADER);
    if !namespace.is_empty() {
        ctx.newline();
        ctx.writeln(&format!("namespace {namespace};"));
    }
}

/// Emit the null check guarding a resolved pointer.
fn emit_null_check(ctx: &mut CodegenContext<'_>, holder: &str, id: &str, pattern: &str) {
    let throw_helper = ctx.config.runtime_type("ThrowHelper");
    ctx.open_scope(&format!("if ({holder} is null)"));
    ctx.writeln(&format!(
        "{throw_helper}.ThrowNullAddress({}, {});",
        crate::naming::string_literal(id),
        crate::naming::string_literal(pattern)
    ));
    ctx.close_scope();
}
