//! Signature Encoder
//!
//! Converts a human-authored byte pattern into the packed form the runtime
//! scanner consumes:
//!
//! ```text
//! "48 8B ?? 10"
//!        ↓ tokenize + pad to a multiple of 8
//! 48 8B ?? 10 ?? ?? ?? ??
//!        ↓ little-endian word assembly (token i → bits 8*i..8*i+8)
//! signature 0x0000000010008B48
//! mask      0x00000000FF00FFFF
//! ```
//!
//! Relocation offsets are copied through unchecked. They are byte positions,
//! not word indices, and the displacement they mark is read from the image at
//! resolve time, so an offset may point at or past the end of the pattern.

use interop_ir::SignatureDescriptor;

use crate::SignatureError;

/// Textual wildcard token.
pub const WILDCARD: &str = "??";

/// Tokens per packed word.
pub const GROUP_SIZE: usize = 8;

/// One position of a byte pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SignatureToken {
    Byte(u8),
    Wildcard,
}

impl SignatureToken {
    /// Parse a single token; `None` for anything but two hex digits or `??`.
    pub fn parse(token: &str) -> Option<Self> {
        if token == WILDCARD {
            return Some(SignatureToken::Wildcard);
        }
        if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u8::from_str_radix(token, 16).ok().map(SignatureToken::Byte)
    }

    /// Byte contributed to the signature word (wildcards read as zero).
    #[inline]
    fn signature_byte(self) -> u8 {
        match self {
            SignatureToken::Byte(b) => b,
            SignatureToken::Wildcard => 0x00,
        }
    }

    /// Byte contributed to the mask word.
    #[inline]
    fn mask_byte(self) -> u8 {
        match self {
            SignatureToken::Byte(_) => 0xFF,
            SignatureToken::Wildcard => 0x00,
        }
    }
}

impl std::fmt::Display for SignatureToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignatureToken::Byte(b) => write!(f, "{b:02X}"),
            SignatureToken::Wildcard => f.write_str(WILDCARD),
        }
    }
}

/// Packed form of a signature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EncodedSignature {
    /// Normalized pattern before padding, for diagnostics.
    pub pattern: String,
    /// Normalized pattern padded with wildcards to whole words.
    pub padded: String,
    pub relocation_offsets: Vec<u8>,
    pub signature_words: Vec<u64>,
    pub mask_words: Vec<u64>,
}

impl EncodedSignature {
    /// Unpack the words back into tokens (padding included).
    pub fn tokens(&self) -> Vec<SignatureToken> {
        self.signature_words
            .iter()
            .zip(&self.mask_words)
            .flat_map(|(&sig, &mask)| {
                let sig = sig.to_le_bytes();
                let mask = mask.to_le_bytes();
                (0..GROUP_SIZE).map(move |i| {
                    if mask[i] == 0 {
                        SignatureToken::Wildcard
                    } else {
                        SignatureToken::Byte(sig[i])
                    }
                })
            })
            .collect()
    }
}

/// Split a pattern into tokens, rejecting anything malformed.
pub fn tokenize(pattern: &str) -> Result<Vec<SignatureToken>, SignatureError> {
    pattern
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            SignatureToken::parse(token).ok_or_else(|| SignatureError::InvalidToken {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}

/// Number of tokens after padding `len` tokens to whole words.
#[inline]
pub fn padded_len(len: usize) -> usize {
    len.div_ceil(GROUP_SIZE) * GROUP_SIZE
}

/// Encode a signature descriptor.
pub fn encode(signature: &SignatureDescriptor) -> Result<EncodedSignature, SignatureError> {
    let mut tokens = tokenize(&signature.pattern)?;
    let length = tokens.len();

    let pattern = join_tokens(&tokens);
    tokens.resize(padded_len(length), SignatureToken::Wildcard);

    let signature_words = pack_words(&tokens, SignatureToken::signature_byte);
    let mask_words = pack_words(&tokens, SignatureToken::mask_byte);

    Ok(EncodedSignature {
        pattern,
        padded: join_tokens(&tokens),
        relocation_offsets: signature.relocation_offsets.clone(),
        signature_words,
        mask_words,
    })
}

fn join_tokens(tokens: &[SignatureToken]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Group whole words of tokens; the last token of a group is the most
/// significant byte.
fn pack_words(tokens: &[SignatureToken], byte: fn(SignatureToken) -> u8) -> Vec<u64> {
    debug_assert!(tokens.len() % GROUP_SIZE == 0, "tokens must be padded");
    tokens
        .chunks_exact(GROUP_SIZE)
        .map(|group| {
            let mut bytes = [0u8; GROUP_SIZE];
            for (slot, &token) in bytes.iter_mut().zip(group) {
                *slot = byte(token);
            }
            u64::from_le_bytes(bytes)
        })
        .collect()
}

#[cfg(test)]
mod tests;
