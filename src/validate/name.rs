//! Per-name legality checks.
//!
//! Pure predicates over single path components. A name is legal only if
//! it can be materialized safely on every supported filesystem, which
//! means rejecting DOS reserved device names, characters that are special
//! to any shell or filesystem, control characters, and anything that is
//! not well-formed UTF-8.

/// Reserved DOS device names on Windows XP and later.
///
/// Anything whose stem (the part before the first dot) matches one of
/// these is redirected to device I/O regardless of extension, so
/// "CON.foo.bar.baz" is just as unsafe as "CON".
const RESERVED_DEVICE_NAMES: &[&str] = &[
    "NUL", "CON", "AUX", "PRN",
    // Console API devices
    "CONIN$", "CONOUT$",
    // Configuration-dependent devices
    "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9",
    "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Longest filename accepted, in bytes.
const MAX_FILENAME_BYTES: usize = 255;

/// Whether a published add-on identifier is legal: non-empty and made of
/// ASCII alphanumerics, `-`, and `_` only. Byte-wise, no normalization.
pub fn addon_name_legal(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Whether a single file or directory name inside an add-on is legal.
pub fn filename_legal(name: &str) -> bool {
    if name.is_empty()
        || name.ends_with('.')
        || name.contains("..")
        || name.len() > MAX_FILENAME_BYTES
    {
        return false;
    }

    // The stem is everything before the FIRST dot: "CON.foo.bar" in
    // "CON.foo.bar.baz" still redirects to CON on Windows, so taking the
    // extension off the end would miss reserved names. A trailing colon
    // ("CON:") also names the device, but ':' is caught by the character
    // check below.
    let stem_end = name.find('.').unwrap_or(name.len());
    let stem = name[..stem_end].to_ascii_uppercase();
    if RESERVED_DEVICE_NAMES.contains(&stem.as_str()) {
        return false;
    }

    name.chars().all(|c| !filename_char_illegal(c))
}

/// [`filename_legal`] over raw bytes of unknown encoding.
///
/// Decoding through `str::from_utf8` rejects invalid sequences, overlong
/// encodings, and encoded surrogates, which is exactly the decode/
/// re-encode round-trip equality check: a `&str` re-encodes to its own
/// bytes by construction.
pub fn filename_bytes_legal(name: &[u8]) -> bool {
    match std::str::from_utf8(name) {
        Ok(name) => filename_legal(name),
        Err(_) => false,
    }
}

/// Denylisted code points for filenames.
///
/// Surrogates (U+D800..U+DFFF) are excluded from `char` by the type
/// itself; the bytes entry point rejects their UTF-8 encodings.
fn filename_char_illegal(c: char) -> bool {
    match c {
        ' ' | '"' | '*' | '/' | ':' | '<' | '>' | '?' | '\\' | '|' | '~' => true,
        '\u{7F}' => true, // DEL
        _ => {
            c < '\u{20}'                        // C0 control characters
                || ('\u{80}'..='\u{9F}').contains(&c) // C1 control characters
        }
    }
}
