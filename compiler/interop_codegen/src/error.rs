//! Compile-time errors.
//!
//! Runtime failures (unresolved addresses, oversized strings) are not errors of
//! the compiler: they are emitted as calls into the runtime `ThrowHelper`.

use thiserror::Error;

/// A signature that violates the input contract.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// A token that is neither two hex digits nor `??`.
    #[error("invalid signature token `{token}` at position {position}")]
    InvalidToken { token: String, position: usize },
}

/// Failure to compile a struct or batch.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// A signature could not be encoded; the struct produces no artifact.
    #[error("malformed signature for `{symbol}`: {source}")]
    MalformedSignature {
        symbol: String,
        #[source]
        source: SignatureError,
    },

    /// Two artifacts would share a file name; the later struct is dropped.
    #[error("artifact `{hint_name}` is generated more than once")]
    DuplicateArtifact { hint_name: String },

    /// The cancellation token fired between two rendering steps.
    #[error("code generation was cancelled")]
    Cancelled,
}

impl CodegenError {
    /// Whether this error aborts the whole batch rather than one struct.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, CodegenError::Cancelled)
    }
}
