//! String-friendly overloads of methods taking C strings.
//!
//! For every `byte*` string parameter the overloads build a null-terminated
//! buffer, pin all buffers in one `fixed` statement and forward to the
//! original method. The pin is released when the statement ends.

use interop_ir::{StringOverload, StructDescriptor};

use crate::naming::return_prefix;
use crate::CodegenContext;

/// Largest encoded string, in bytes, that is buffered on the stack.
pub const STACKALLOC_THRESHOLD: usize = 512;

/// Source type of the string arguments.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum StringSource {
    /// `string`, encoded as UTF-8.
    Text,
    /// `ReadOnlySpan<byte>`, copied as is.
    Bytes,
}

impl StringSource {
    fn parameter_type(self) -> &'static str {
        match self {
            StringSource::Text => "string",
            StringSource::Bytes => "global::System.ReadOnlySpan<byte>",
        }
    }

    fn length_expr(self, name: &str) -> String {
        match self {
            StringSource::Text => format!("global::System.Text.Encoding.UTF8.GetByteCount({name})"),
            StringSource::Bytes => format!("{name}.Length"),
        }
    }

    fn copy_stmt(self, name: &str) -> String {
        match self {
            StringSource::Text => {
                format!("global::System.Text.Encoding.UTF8.GetBytes({name}, {name}Bytes);")
            }
            StringSource::Bytes => format!("{name}.CopyTo({name}Bytes);"),
        }
    }
}

pub fn emit_string_overloads(ctx: &mut CodegenContext<'_>, desc: &StructDescriptor) {
    for overload in &desc.string_overloads {
        // Without a string parameter the overload would repeat the original.
        if overload.string_parameters().next().is_none() {
            continue;
        }
        emit_overload(ctx, overload, StringSource::Text);
        emit_overload(ctx, overload, StringSource::Bytes);
    }
}

fn emit_overload(ctx: &mut CodegenContext<'_>, overload: &StringOverload, source: StringSource) {
    let method = &overload.method;

    let parameters: Vec<String> = method
        .parameters
        .iter()
        .map(|p| {
            if overload.is_string_parameter(&p.name, &p.ty) {
                format!("{} {}", source.parameter_type(), p.name)
            } else {
                format!("{} {}", p.ty, p.name)
            }
        })
        .collect();
    let arguments: Vec<String> = method
        .parameters
        .iter()
        .map(|p| {
            if overload.is_string_parameter(&p.name, &p.ty) {
                format!("{}Ptr", p.name)
            } else {
                p.name.clone()
            }
        })
        .collect();
    let pins: Vec<String> = overload
        .string_parameters()
        .map(|name| format!("{name}Ptr = {name}Bytes"))
        .collect();

    let modifiers = method.modifiers_without_partial();
    let mut header = String::new();
    if !modifiers.is_empty() {
        header.push_str(&modifiers);
        header.push(' ');
    }
    header.push_str(&format!(
        "{} {}({})",
        method.return_type,
        method.name,
        parameters.join(", ")
    ));

    ctx.item_separator();
    ctx.open_scope(&header);
    for name in overload.string_parameters() {
        let length = format!("{name}Length");
        ctx.writeln(&format!("int {length} = {};", source.length_expr(name)));
        ctx.writeln(&format!(
            "global::System.Span<byte> {name}Bytes = {length} <= {STACKALLOC_THRESHOLD} ? stackalloc byte[{length} + 1] : new byte[{length} + 1];"
        ));
        ctx.writeln(&source.copy_stmt(name));
        ctx.writeln(&format!("{name}Bytes[{length}] = 0;"));
    }
    ctx.open_scope(&format!("fixed (byte* {})", pins.join(", ")));
    ctx.writeln(&format!(
        "{}{}({});",
        return_prefix(method),
        method.name,
        arguments.join(", ")
    ));
    ctx.close_scope();
    ctx.close_scope();
}
