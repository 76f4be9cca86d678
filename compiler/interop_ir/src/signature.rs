//! Byte signatures.

/// A byte pattern locating a function or data reference inside a loaded image.
///
/// `pattern` is a whitespace separated list of tokens, each either two hex
/// digits or the `??` wildcard. `relocation_offsets` lists the byte positions
/// where a 4-byte relative displacement starts; the resolver adds those
/// displacements to their own position to recover an absolute target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignatureDescriptor {
    pub pattern: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub relocation_offsets: Vec<u8>,
}

impl SignatureDescriptor {
    /// Create a signature without relocation offsets.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            relocation_offsets: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_relocation_offsets(mut self, offsets: impl Into<Vec<u8>>) -> Self {
        self.relocation_offsets = offsets.into();
        self
    }
}
