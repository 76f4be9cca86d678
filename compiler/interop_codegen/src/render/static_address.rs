//! Static addresses: resolved data pointers and null-checked accessors.

use interop_ir::{StaticAddress, StructDescriptor};

use super::emit_null_check;
use crate::naming::{address_id, method_header};
use crate::CodegenContext;

/// Holder property name and type. A pointer-flagged address holds a pointer
/// to the value, so the holder gains one level of indirection.
fn holder(address: &StaticAddress) -> (String, String) {
    let method = &address.method;
    if address.is_pointer {
        (format!("pp{}", method.name), format!("{}*", method.return_type))
    } else {
        (format!("p{}", method.name), method.return_type.clone())
    }
}

pub fn emit_static_addresses(ctx: &mut CodegenContext<'_>, desc: &StructDescriptor) {
    if desc.static_addresses.is_empty() {
        return;
    }

    ctx.item_separator();
    ctx.open_scope("public unsafe static class StaticAddressPointers");
    for address in &desc.static_addresses {
        let (name, ty) = holder(address);
        ctx.writeln(&format!(
            "public static {ty} {name} => ({ty})Addresses.{}.Value;",
            address.method.name
        ));
    }
    ctx.close_scope();

    for address in &desc.static_addresses {
        let method = &address.method;
        let (name, _) = holder(address);
        let holder = format!("StaticAddressPointers.{name}");
        let pattern = ctx.addresses.pattern(&method.name).to_string();

        ctx.item_separator();
        ctx.open_scope(&method_header(method));
        emit_null_check(ctx, &holder, &address_id(desc, &method.name), &pattern);
        let deref = if address.is_pointer { "*" } else { "" };
        ctx.writeln(&format!("return {deref}{holder};"));
        ctx.close_scope();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interop_ir::{MethodInfo, SignatureDescriptor};

    #[test]
    fn pointer_flag_adds_indirection() {
        let method = MethodInfo::new_static("Instance", "Framework*");
        let sig = SignatureDescriptor::new("48 8B 0D");
        assert_eq!(
            holder(&StaticAddress::new(method.clone(), sig.clone(), true)),
            ("ppInstance".to_string(), "Framework**".to_string())
        );
        assert_eq!(
            holder(&StaticAddress::new(method, sig, false)),
            ("pInstance".to_string(), "Framework*".to_string())
        );
    }
}
