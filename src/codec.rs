//! Binary-safe escaping for the textual tree container.
//!
//! The container's serialization is line-oriented text, so raw file bytes
//! must not contain NUL, carriage returns, or the parser's own metadata
//! marker (0xFE). Each such byte, and the escape marker itself, is
//! written as the marker followed by the byte plus one; decoding reverses
//! the increment. The transform wraps mod 256, which is fine because the
//! decoder subtracts unconditionally.
//!
//! This is a storage encoding, not a security boundary.

/// Escape marker preceding every escaped byte.
const ESCAPE_BYTE: u8 = 0x01;

/// Bytes that cannot appear raw inside the textual container.
fn needs_escaping(b: u8) -> bool {
    matches!(
        b,
        0x00            // NUL
        | ESCAPE_BYTE
        | 0x0D          // carriage return
        | 0xFE          // container metadata marker
    )
}

/// Escape raw bytes for storage in the textual container.
pub fn encode_binary(data: &[u8]) -> Vec<u8> {
    let mut res = Vec::with_capacity(data.len());
    for &b in data {
        if needs_escaping(b) {
            res.push(ESCAPE_BYTE);
            res.push(b.wrapping_add(1));
        } else {
            res.push(b);
        }
    }
    res
}

/// Reverse [`encode_binary`].
///
/// A marker at the very end of the input has no byte to decode and is
/// emitted literally; truncated input degrades gracefully instead of
/// erroring, since the codec has no error channel.
pub fn unencode_binary(data: &[u8]) -> Vec<u8> {
    let mut res = Vec::with_capacity(data.len());
    let mut iter = data.iter();
    while let Some(&b) = iter.next() {
        if b == ESCAPE_BYTE {
            match iter.next() {
                Some(&next) => res.push(next.wrapping_sub(1)),
                None => res.push(b),
            }
        } else {
            res.push(b);
        }
    }
    res
}
