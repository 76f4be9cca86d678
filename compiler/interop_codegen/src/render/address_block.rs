//! Addresses block: one runtime address record per signature.

use interop_ir::StructDescriptor;

use crate::naming::{array_literal, hex_word, string_literal};
use crate::CodegenContext;

/// Emit `public static class Addresses` with one record per encoded
/// signature. The resolved value starts at zero and is filled in by the
/// runtime resolver.
pub fn emit_addresses(ctx: &mut CodegenContext<'_>, desc: &StructDescriptor) {
    debug_assert_eq!(desc.has_signatures(), !ctx.addresses.is_empty());
    if !desc.has_signatures() {
        return;
    }

    let address_type = ctx.config.runtime_type("Address");
    let records: Vec<String> = ctx
        .addresses
        .iter()
        .map(|address| {
            let encoded = &address.encoded;
            format!(
                "public static readonly {address_type} {} = new {address_type}({}, {}, {}, {}, {}, 0);",
                address.name,
                string_literal(&address.id),
                string_literal(&encoded.padded),
                array_literal("byte", &encoded.relocation_offsets, u8::to_string),
                array_literal("ulong", &encoded.signature_words, |w| hex_word(*w)),
                array_literal("ulong", &encoded.mask_words, |w| hex_word(*w)),
            )
        })
        .collect();

    ctx.item_separator();
    ctx.open_scope("public static class Addresses");
    for record in &records {
        ctx.writeln(record);
    }
    ctx.close_scope();
}
