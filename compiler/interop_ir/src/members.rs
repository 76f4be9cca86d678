//! Function, address and array descriptors owned by a struct.

use crate::{MethodInfo, SignatureDescriptor};

/// A function located by scanning the image for its signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberFunction {
    pub method: MethodInfo,
    pub signature: SignatureDescriptor,
}

impl MemberFunction {
    pub fn new(method: MethodInfo, signature: SignatureDescriptor) -> Self {
        Self { method, signature }
    }
}

/// A function dispatched through the owning struct's virtual table.
///
/// `index` is the zero-based slot; virtual functions are always instance
/// methods regardless of `method.is_static`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualFunction {
    pub method: MethodInfo,
    pub index: u32,
}

impl VirtualFunction {
    pub fn new(method: MethodInfo, index: u32) -> Self {
        Self { method, index }
    }
}

/// A static data location resolved from a signature.
///
/// When `is_pointer` is set the resolved address holds a pointer to the value,
/// so one extra dereference is needed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticAddress {
    pub method: MethodInfo,
    pub signature: SignatureDescriptor,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_pointer: bool,
}

impl StaticAddress {
    pub fn new(method: MethodInfo, signature: SignatureDescriptor, is_pointer: bool) -> Self {
        Self {
            method,
            signature,
            is_pointer,
        }
    }
}

/// Request for string-friendly overloads of a method taking C strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringOverload {
    pub method: MethodInfo,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ignored_parameters: Vec<String>,
}

/// Parameter type treated as a null-terminated UTF-8 string.
const C_STRING_TYPE: &str = "byte*";

impl StringOverload {
    pub fn new(method: MethodInfo) -> Self {
        Self {
            method,
            ignored_parameters: Vec::new(),
        }
    }

    #[must_use]
    pub fn ignoring(mut self, parameter: impl Into<String>) -> Self {
        self.ignored_parameters.push(parameter.into());
        self
    }

    /// Whether a parameter gets converted from a string in the overloads.
    pub fn is_string_parameter(&self, name: &str, ty: &str) -> bool {
        ty == C_STRING_TYPE && !self.ignored_parameters.iter().any(|p| p == name)
    }

    /// Names of the parameters converted from strings, in declaration order.
    pub fn string_parameters(&self) -> impl Iterator<Item = &str> + '_ {
        self.method
            .parameters
            .iter()
            .filter(|p| self.is_string_parameter(&p.name, &p.ty))
            .map(|p| p.name.as_str())
    }
}

/// Text encoding of a character-unit element type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CharacterKind {
    /// `byte` elements holding UTF-8.
    Utf8,
    /// `char` elements holding UTF-16.
    Utf16,
}

/// A fixed-size inline array field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedArray {
    /// Backing field name, conventionally `_camelCase`.
    pub field: String,
    pub element_type: String,
    pub length: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_string: bool,
}

impl FixedArray {
    pub fn new(field: impl Into<String>, element_type: impl Into<String>, length: u32) -> Self {
        Self {
            field: field.into(),
            element_type: element_type.into(),
            length,
            is_string: false,
        }
    }

    #[must_use]
    pub fn with_string_accessor(mut self) -> Self {
        self.is_string = true;
        self
    }

    /// Accessor name derived from the backing field: `_textBuffer` becomes
    /// `TextBuffer`.
    pub fn public_name(&self) -> String {
        let trimmed = self.field.trim_start_matches('_');
        let mut chars = trimmed.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => self.field.clone(),
        }
    }

    pub fn character_kind(&self) -> Option<CharacterKind> {
        match self.element_type.as_str() {
            "byte" => Some(CharacterKind::Utf8),
            "char" => Some(CharacterKind::Utf16),
            _ => None,
        }
    }

    /// The string accessor is only generated for character-unit elements.
    pub fn string_kind(&self) -> Option<CharacterKind> {
        if self.is_string {
            self.character_kind()
        } else {
            None
        }
    }
}
