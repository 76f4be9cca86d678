use super::*;
use pretty_assertions::assert_eq;

fn encode_pattern(pattern: &str) -> EncodedSignature {
    encode_pattern_with(&SignatureDescriptor::new(pattern))
}

fn encode_pattern_with(signature: &SignatureDescriptor) -> EncodedSignature {
    match encode(signature) {
        Ok(encoded) => encoded,
        Err(e) => panic!("`{}` should encode: {e}", signature.pattern),
    }
}

#[test]
fn short_pattern_is_padded_with_wildcards() {
    let encoded = encode_pattern("48 8B ?? 10");
    assert_eq!(encoded.pattern, "48 8B ?? 10");
    assert_eq!(encoded.padded, "48 8B ?? 10 ?? ?? ?? ??");
    assert_eq!(encoded.signature_words, [0x0000_0000_1000_8B48]);
    assert_eq!(encoded.mask_words, [0x0000_0000_FF00_FFFF]);
}

#[test]
fn aligned_pattern_gets_no_padding() {
    let encoded = encode_pattern("E8 ?? ?? ?? ?? 48 8B C8");
    assert_eq!(encoded.padded, "E8 ?? ?? ?? ?? 48 8B C8");
    assert_eq!(encoded.signature_words, [0xC88B_4800_0000_00E8]);
    assert_eq!(encoded.mask_words, [0xFFFF_FF00_0000_00FF]);
}

#[test]
fn multi_word_pattern() {
    let encoded = encode_pattern("01 02 03 04 05 06 07 08 09");
    assert_eq!(encoded.tokens().len(), 16);
    assert_eq!(
        encoded.signature_words,
        [0x0807_0605_0403_0201, 0x0000_0000_0000_0009]
    );
    assert_eq!(
        encoded.mask_words,
        [u64::MAX, 0x0000_0000_0000_00FF]
    );
}

#[test]
fn wildcard_group_keeps_zero_mask() {
    let encoded = encode_pattern("?? ?? ?? ?? ?? ?? ?? ?? 48");
    assert_eq!(encoded.mask_words, [0, 0xFF]);
    assert_eq!(encoded.signature_words, [0, 0x48]);
}

#[test]
fn empty_pattern_encodes_to_nothing() {
    let encoded = encode_pattern("   ");
    assert_eq!(encoded.padded, "");
    assert!(encoded.signature_words.is_empty());
    assert!(encoded.mask_words.is_empty());
    assert!(encoded.relocation_offsets.is_empty());
}

#[test]
fn lowercase_hex_is_normalized() {
    let encoded = encode_pattern("e8 ?? ff");
    assert_eq!(encoded.pattern, "E8 ?? FF");
    assert_eq!(encoded.signature_words, [0x0000_0000_00FF_00E8]);
}

#[test]
fn relocation_offsets_pass_through() {
    let sig = SignatureDescriptor::new("E8 ?? ?? ?? ?? 48 8B 0D ?? ?? ?? ??")
        .with_relocation_offsets([1, 8]);
    let encoded = encode(&sig);
    assert_eq!(encoded.map(|e| e.relocation_offsets), Ok(vec![1, 8]));
}

#[test]
fn relocation_offset_may_end_the_pattern() {
    // The operand is read from the image, so the pattern can stop before it.
    let sig = SignatureDescriptor::new("48 8B 0D").with_relocation_offsets([3]);
    let encoded = encode_pattern_with(&sig);
    assert_eq!(encoded.relocation_offsets, [3]);
    assert_eq!(encoded.padded, "48 8B 0D ?? ?? ?? ?? ??");

    let sig = SignatureDescriptor::new("E8").with_relocation_offsets([1, 200]);
    assert_eq!(encode_pattern_with(&sig).relocation_offsets, [1, 200]);
}

#[test]
fn invalid_tokens_are_rejected() {
    for (pattern, token, position) in [
        ("48 8G", "8G", 1),
        ("48 ? 10", "?", 1),
        ("488B", "488B", 0),
        ("48 8B ?? 10 x", "x", 4),
        ("+1", "+1", 0),
    ] {
        assert_eq!(
            tokenize(pattern),
            Err(SignatureError::InvalidToken {
                token: token.to_string(),
                position
            }),
            "pattern `{pattern}`"
        );
    }
}

#[test]
fn tokens_round_trip_through_words() {
    let encoded = encode_pattern("48 8B ?? 10");
    let tokens = encoded.tokens();
    assert_eq!(tokens.len(), 8);
    assert_eq!(
        &tokens[..4],
        [
            SignatureToken::Byte(0x48),
            SignatureToken::Byte(0x8B),
            SignatureToken::Wildcard,
            SignatureToken::Byte(0x10),
        ]
    );
    assert!(tokens[4..].iter().all(|t| *t == SignatureToken::Wildcard));
}

#[test]
fn padded_len_rounds_up_to_words() {
    assert_eq!(padded_len(0), 0);
    assert_eq!(padded_len(1), 8);
    assert_eq!(padded_len(8), 8);
    assert_eq!(padded_len(9), 16);
}
