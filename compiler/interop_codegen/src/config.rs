//! Code generation configuration.

/// Default pointer width of the target process, in bytes.
pub const DEFAULT_POINTER_SIZE: u32 = 8;

/// Configuration shared by every renderer in a compilation batch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CodegenConfig {
    /// Target pointer width; virtual table slots sit at `index * pointer_size`.
    pub pointer_size: u32,
    /// Namespace of the runtime resolver (`Address`, `Resolver`, `ThrowHelper`).
    pub runtime_namespace: String,
    /// Namespace of the batch-level artifacts (registration, inline arrays).
    pub generated_namespace: String,
    /// Compile structs on the rayon thread pool.
    pub parallel: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            pointer_size: DEFAULT_POINTER_SIZE,
            runtime_namespace: "Interop.Runtime".to_string(),
            generated_namespace: "Interop.Generated".to_string(),
            parallel: true,
        }
    }
}

impl CodegenConfig {
    /// Create a config for a target with the given pointer width.
    pub fn with_pointer_size(pointer_size: u32) -> Self {
        Self {
            pointer_size,
            ..Default::default()
        }
    }

    /// Fully qualified name of a runtime type, e.g. `global::Interop.Runtime.Address`.
    pub fn runtime_type(&self, name: &str) -> String {
        format!("global::{}.{name}", self.runtime_namespace)
    }

    /// Byte offset of a virtual table slot.
    #[inline]
    pub fn slot_offset(&self, index: u32) -> u64 {
        u64::from(index) * u64::from(self.pointer_size)
    }
}
