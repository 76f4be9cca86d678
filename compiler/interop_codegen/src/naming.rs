//! Naming and formatting helpers shared by the renderers.

use interop_ir::{MethodInfo, StructDescriptor};

/// `System.Runtime.InteropServices`, fully qualified.
pub const INTEROP_SERVICES: &str = "global::System.Runtime.InteropServices";

/// `System.Runtime.CompilerServices`, fully qualified.
pub const COMPILER_SERVICES: &str = "global::System.Runtime.CompilerServices";

/// Name of the implicit first parameter of instance delegates.
pub const THIS_PARAMETER: &str = "thisPtr";

/// Process-wide identifier of an address record: the dotted struct name plus
/// the member name.
pub fn address_id(desc: &StructDescriptor, member: &str) -> String {
    format!("{}.{member}", desc.qualified_name())
}

/// `global::`-qualified path of the struct type.
pub fn global_type_path(desc: &StructDescriptor) -> String {
    format!("global::{}", desc.qualified_name())
}

/// Pointer to the struct, as seen from inside its own scope.
pub fn this_pointer_type(desc: &StructDescriptor) -> String {
    format!("{}*", desc.name)
}

pub fn virtual_table_type(desc: &StructDescriptor) -> String {
    format!("{}VirtualTable", desc.name)
}

/// Expression producing the struct's own address inside an instance member.
pub fn this_pointer_expr(desc: &StructDescriptor) -> String {
    format!(
        "({}){COMPILER_SERVICES}.Unsafe.AsPointer(ref this)",
        this_pointer_type(desc)
    )
}

/// `delegate* unmanaged<...>` type of a function; instance functions take the
/// struct pointer first.
pub fn function_pointer_type(
    desc: &StructDescriptor,
    method: &MethodInfo,
    instance: bool,
) -> String {
    let mut types = Vec::with_capacity(method.parameters.len() + 2);
    if instance {
        types.push(this_pointer_type(desc));
    }
    types.extend(method.parameters.iter().map(|p| p.ty.clone()));
    types.push(method.return_type.clone());
    format!("delegate* unmanaged<{}>", types.join(", "))
}

/// `int a, byte* name`
pub fn parameter_list(method: &MethodInfo) -> String {
    method
        .parameters
        .iter()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Arguments forwarded to a native call, with the this pointer first for
/// instance calls.
pub fn call_arguments(desc: &StructDescriptor, method: &MethodInfo, instance: bool) -> String {
    let mut args = Vec::with_capacity(method.parameters.len() + 1);
    if instance {
        args.push(this_pointer_expr(desc));
    }
    args.extend(method.parameters.iter().map(|p| p.name.clone()));
    args.join(", ")
}

/// `public partial void Close(int a)`
pub fn method_header(method: &MethodInfo) -> String {
    format!(
        "{} {} {}({})",
        method.modifiers,
        method.return_type,
        method.name,
        parameter_list(method)
    )
}

/// `return ` for value-returning methods, empty for `void`.
pub fn return_prefix(method: &MethodInfo) -> &'static str {
    if method.returns_void() {
        ""
    } else {
        "return "
    }
}

/// Quote a string as a regular C# string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// `new byte[] { 0, 8 }`, or `new byte[0]` when empty.
pub fn array_literal<T>(element: &str, items: &[T], format: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        return format!("new {element}[0]");
    }
    let items: Vec<String> = items.iter().map(format).collect();
    format!("new {element}[] {{ {} }}", items.join(", "))
}

/// `0x0000000010008B48`
pub fn hex_word(word: u64) -> String {
    format!("0x{word:016X}")
}
