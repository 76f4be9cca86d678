//! Signature-bearing entries of a struct.
//!
//! The Addresses block, the forwarding code and the resolver registration all
//! enumerate entries through [`address_entries`], so the emitted identifiers
//! agree across artifacts.

use interop_ir::{SignatureDescriptor, StructDescriptor};
use rustc_hash::FxHashMap;

use crate::naming;
use crate::signature::{self, EncodedSignature};
use crate::CodegenError;

/// Address record name of the static virtual table.
pub const STATIC_VIRTUAL_TABLE: &str = "StaticVirtualTable";

/// A named signature owned by a struct.
#[derive(Copy, Clone, Debug)]
pub struct AddressEntry<'a> {
    pub name: &'a str,
    pub signature: &'a SignatureDescriptor,
}

/// Member functions in declaration order, then static addresses, then the
/// static virtual table.
pub fn address_entries(desc: &StructDescriptor) -> Vec<AddressEntry<'_>> {
    let members = desc.member_functions.iter().map(|f| AddressEntry {
        name: &f.method.name,
        signature: &f.signature,
    });
    let statics = desc.static_addresses.iter().map(|a| AddressEntry {
        name: &a.method.name,
        signature: &a.signature,
    });
    let vtable = desc.static_virtual_table.iter().map(|signature| AddressEntry {
        name: STATIC_VIRTUAL_TABLE,
        signature,
    });
    members.chain(statics).chain(vtable).collect()
}

/// An entry after encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedAddress {
    /// Record name inside the struct's `Addresses` class.
    pub name: String,
    /// Process-wide identifier, e.g. `Game.UI.Foo.Close`.
    pub id: String,
    pub encoded: EncodedSignature,
}

/// Encoded signatures of one struct, in [`address_entries`] order.
#[derive(Clone, Debug, Default)]
pub struct AddressTable {
    entries: Vec<EncodedAddress>,
    by_name: FxHashMap<String, usize>,
}

impl AddressTable {
    /// Encode every signature of `desc`; the first malformed one aborts.
    pub fn encode(desc: &StructDescriptor) -> Result<Self, CodegenError> {
        let mut table = AddressTable::default();
        for entry in address_entries(desc) {
            let id = naming::address_id(desc, entry.name);
            let encoded = signature::encode(entry.signature).map_err(|source| {
                CodegenError::MalformedSignature {
                    symbol: id.clone(),
                    source,
                }
            })?;
            table.by_name.insert(entry.name.to_string(), table.entries.len());
            table.entries.push(EncodedAddress {
                name: entry.name.to_string(),
                id,
                encoded,
            });
        }
        Ok(table)
    }

    pub fn get(&self, name: &str) -> Option<&EncodedAddress> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Normalized pattern of an entry, for unresolved-address diagnostics.
    pub fn pattern(&self, name: &str) -> &str {
        self.get(name).map_or("", |a| a.encoded.pattern.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &EncodedAddress> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
