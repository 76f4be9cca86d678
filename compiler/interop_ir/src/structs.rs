//! Struct descriptors.

use crate::{
    FixedArray, MemberFunction, SignatureDescriptor, StaticAddress, StringOverload,
    VirtualFunction,
};

/// Everything known about one native struct.
///
/// The nesting hierarchy is `name` followed by `containing_types`, outermost
/// last, so it always holds at least the struct itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StructDescriptor {
    pub name: String,
    /// Dotted namespace; empty for the global namespace.
    pub namespace: String,
    /// Enclosing types, innermost first.
    pub containing_types: Vec<String>,
    pub member_functions: Vec<MemberFunction>,
    pub virtual_functions: Vec<VirtualFunction>,
    pub static_addresses: Vec<StaticAddress>,
    pub string_overloads: Vec<StringOverload>,
    pub fixed_arrays: Vec<FixedArray>,
    pub static_virtual_table: Option<SignatureDescriptor>,
}

impl StructDescriptor {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Nest this struct inside `parent`. Call from the innermost enclosing
    /// type outward.
    #[must_use]
    pub fn nested_in(mut self, parent: impl Into<String>) -> Self {
        self.containing_types.push(parent.into());
        self
    }

    #[must_use]
    pub fn with_member_function(mut self, function: MemberFunction) -> Self {
        self.member_functions.push(function);
        self
    }

    #[must_use]
    pub fn with_virtual_function(mut self, function: VirtualFunction) -> Self {
        self.virtual_functions.push(function);
        self
    }

    #[must_use]
    pub fn with_static_address(mut self, address: StaticAddress) -> Self {
        self.static_addresses.push(address);
        self
    }

    #[must_use]
    pub fn with_string_overload(mut self, overload: StringOverload) -> Self {
        self.string_overloads.push(overload);
        self
    }

    #[must_use]
    pub fn with_fixed_array(mut self, array: FixedArray) -> Self {
        self.fixed_arrays.push(array);
        self
    }

    #[must_use]
    pub fn with_static_virtual_table(mut self, signature: SignatureDescriptor) -> Self {
        self.static_virtual_table = Some(signature);
        self
    }

    /// The nesting hierarchy, innermost (the struct itself) first.
    pub fn hierarchy(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        std::iter::once(self.name.as_str()).chain(self.containing_types.iter().map(String::as_str))
    }

    /// Type names from the outermost enclosing type down to this struct.
    pub fn type_path(&self) -> Vec<&str> {
        self.hierarchy().rev().collect()
    }

    /// Dotted name including namespace, e.g. `Game.UI.Outer.Inner`.
    pub fn qualified_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.containing_types.len() + 2);
        if !self.namespace.is_empty() {
            parts.push(&self.namespace);
        }
        parts.extend(self.type_path());
        parts.join(".")
    }

    /// Whether any entry carries a signature the resolver must scan for.
    pub fn has_signatures(&self) -> bool {
        !self.member_functions.is_empty()
            || !self.static_addresses.is_empty()
            || self.static_virtual_table.is_some()
    }

    /// Whether the struct needs a virtual table type.
    pub fn has_virtual_table(&self) -> bool {
        !self.virtual_functions.is_empty() || self.static_virtual_table.is_some()
    }
}
