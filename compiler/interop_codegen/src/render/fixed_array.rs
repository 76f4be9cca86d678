//! Fixed-size inline arrays.
//!
//! Per struct: span accessors and optional string properties. Per batch: one
//! `FixedSizeArray<N><T>` inline-array type for every distinct length.

use interop_ir::{CharacterKind, FixedArray, StructDescriptor};
use rustc_hash::FxHashSet;

use super::emit_file_header;
use crate::naming::{string_literal, COMPILER_SERVICES};
use crate::{CodegenConfig, CodegenContext};

const UNSCOPED_REF: &str = "[global::System.Diagnostics.CodeAnalysis.UnscopedRefAttribute]";

pub fn emit_fixed_arrays(ctx: &mut CodegenContext<'_>, desc: &StructDescriptor) {
    for array in &desc.fixed_arrays {
        ctx.item_separator();
        ctx.writeln(UNSCOPED_REF);
        ctx.writeln(&format!(
            "public global::System.Span<{}> {} => {};",
            array.element_type,
            array.public_name(),
            array.field
        ));

        if let Some(kind) = array.string_kind() {
            if array.length > 0 {
                ctx.item_separator();
                emit_string_property(ctx, array, kind);
            }
        }
    }
}

/// String view of a character array. The setter rejects values that leave no
/// room for the terminator before touching the array.
fn emit_string_property(ctx: &mut CodegenContext<'_>, array: &FixedArray, kind: CharacterKind) {
    let property = format!("{}String", array.public_name());
    let capacity = array.length - 1;
    let field = &array.field;
    let throw = format!(
        "{}.ThrowStringSizeTooLarge({}, {capacity});",
        ctx.config.runtime_type("ThrowHelper"),
        string_literal(&property)
    );

    ctx.open_scope(&format!("public string {property}"));
    match kind {
        CharacterKind::Utf8 => {
            ctx.open_scope("get");
            ctx.writeln(&format!("global::System.ReadOnlySpan<byte> span = {field};"));
            ctx.writeln("int length = span.IndexOf((byte)0);");
            ctx.writeln(
                "return global::System.Text.Encoding.UTF8.GetString(length < 0 ? span : span[..length]);",
            );
            ctx.close_scope();
            ctx.open_scope("set");
            ctx.writeln("int length = global::System.Text.Encoding.UTF8.GetByteCount(value);");
            ctx.open_scope(&format!("if (length > {capacity})"));
            ctx.writeln(&throw);
            ctx.close_scope();
            ctx.writeln(&format!("global::System.Span<byte> span = {field};"));
            ctx.writeln("global::System.Text.Encoding.UTF8.GetBytes(value, span);");
            ctx.writeln("span[length..].Clear();");
            ctx.close_scope();
        }
        CharacterKind::Utf16 => {
            ctx.open_scope("get");
            ctx.writeln(&format!("global::System.ReadOnlySpan<char> span = {field};"));
            ctx.writeln("int length = span.IndexOf('\\0');");
            ctx.writeln("return new string(length < 0 ? span : span[..length]);");
            ctx.close_scope();
            ctx.open_scope("set");
            ctx.open_scope(&format!("if (value.Length > {capacity})"));
            ctx.writeln(&throw);
            ctx.close_scope();
            ctx.writeln(&format!("global::System.Span<char> span = {field};"));
            ctx.writeln("value.AsSpan().CopyTo(span);");
            ctx.writeln("span[value.Length..].Clear();");
            ctx.close_scope();
        }
    }
    ctx.close_scope();
}

/// Distinct inline-array lengths seen across a batch.
///
/// Passed explicitly to [`render_fixed_array_types`]; structs compiled on
/// different threads are recorded by the batch after the fact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedArraySizes {
    sizes: FxHashSet<u32>,
}

impl FixedArraySizes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every array length declared by `desc`.
    pub fn record(&mut self, desc: &StructDescriptor) {
        self.sizes
            .extend(desc.fixed_arrays.iter().map(|a| a.length).filter(|&n| n > 0));
    }

    pub fn merge(&mut self, other: &FixedArraySizes) {
        self.sizes.extend(other.sizes.iter().copied());
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Lengths in ascending order.
    pub fn sorted(&self) -> Vec<u32> {
        let mut sizes: Vec<u32> = self.sizes.iter().copied().collect();
        sizes.sort_unstable();
        sizes
    }
}

/// Render the batch-level inline-array types, one per recorded length.
pub fn render_fixed_array_types(sizes: &FixedArraySizes, config: &CodegenConfig) -> String {
    let mut ctx = CodegenContext::new(config);
    emit_file_header(&mut ctx, &config.generated_namespace);
    for length in sizes.sorted() {
        ctx.item_separator();
        ctx.writeln(&format!("[{COMPILER_SERVICES}.InlineArrayAttribute({length})]"));
        ctx.open_scope(&format!(
            "public struct FixedSizeArray{length}<T> where T : unmanaged"
        ));
        ctx.writeln("private T _element0;");
        ctx.close_scope();
    }
    ctx.take_output()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_array(name: &str, length: u32) -> StructDescriptor {
        StructDescriptor::new("", name).with_fixed_array(FixedArray::new("_data", "byte", length))
    }

    #[test]
    fn sizes_are_deduplicated_across_structs() {
        let a = StructDescriptor::new("", "A")
            .with_fixed_array(FixedArray::new("_name", "byte", 32))
            .with_fixed_array(FixedArray::new("_ids", "int", 4));
        let b = StructDescriptor::new("", "B")
            .with_fixed_array(FixedArray::new("_title", "byte", 32));

        let mut sizes = FixedArraySizes::new();
        sizes.record(&a);
        sizes.record(&b);
        assert_eq!(sizes.sorted(), [4, 32]);
        assert_eq!(sizes.len(), 2);
    }

    #[test]
    fn merge_unions_partitions() {
        let mut left = FixedArraySizes::new();
        left.record(&with_array("A", 8));
        let mut right = FixedArraySizes::new();
        right.record(&with_array("B", 8));
        right.record(&with_array("C", 2));
        left.merge(&right);
        assert_eq!(left.sorted(), [2, 8]);
        assert_eq!(left.len(), 2);
    }

    #[test]
    fn zero_length_arrays_are_ignored() {
        let mut sizes = FixedArraySizes::new();
        sizes.record(&with_array("A", 0));
        assert!(sizes.is_empty());
    }
}
