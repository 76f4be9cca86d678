//! Resolver registration for a whole batch.

use interop_ir::StructDescriptor;

use crate::addresses::address_entries;
use crate::naming::global_type_path;
use crate::render::emit_file_header;
use crate::{CodegenConfig, CodegenContext};

/// Render `Addresses.Register()` / `Addresses.Unregister()` covering every
/// address record of `structs`, in struct order then entry order.
pub fn render_registration(structs: &[&StructDescriptor], config: &CodegenConfig) -> String {
    let records: Vec<String> = structs
        .iter()
        .flat_map(|desc| {
            let path = global_type_path(desc);
            address_entries(desc)
                .into_iter()
                .map(move |entry| format!("{path}.Addresses.{}", entry.name))
        })
        .collect();
    tracing::debug!(count = records.len(), "registering addresses");

    let resolver = config.runtime_type("Resolver");
    let mut ctx = CodegenContext::new(config);
    emit_file_header(&mut ctx, &config.generated_namespace);

    ctx.item_separator();
    ctx.open_scope("public static class Addresses");
    for (method, call) in [("Register", "RegisterAddress"), ("Unregister", "UnregisterAddress")] {
        ctx.item_separator();
        ctx.open_scope(&format!("public static void {method}()"));
        for record in &records {
            ctx.writeln(&format!("{resolver}.GetInstance.{call}({record});"));
        }
        ctx.close_scope();
    }
    ctx.close_scope();

    ctx.take_output()
}
