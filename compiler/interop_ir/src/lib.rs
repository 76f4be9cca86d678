//! Interop IR - Descriptor Model
//!
//! Read-only descriptions of native struct layouts, produced by a front-end and
//! consumed by `interop_codegen`:
//! - Struct descriptors with their nesting hierarchy
//! - Byte signatures (hex/wildcard patterns plus relocation offsets)
//! - Member, virtual and static-address functions
//! - String overload requests and fixed-size inline arrays
//!
//! # Traits
//!
//! Every type derives `Clone`, `Debug`, `PartialEq`, `Eq` and `Hash`.
//! With the `serde` feature enabled, every type can also be read from a
//! descriptor document.

mod members;
mod method;
mod signature;
mod structs;

pub use members::{
    CharacterKind, FixedArray, MemberFunction, StaticAddress, StringOverload, VirtualFunction,
};
pub use method::{MethodInfo, Parameter};
pub use signature::SignatureDescriptor;
pub use structs::StructDescriptor;
