//! A lossless single-byte-per-character view of raw bytes.
//!
//! Multipart bodies mix textual structure (boundary lines, headers) with
//! arbitrary binary payloads. Decoding the whole body as UTF-8 before
//! splitting would reject or alter byte sequences that collide with
//! multi-byte encodings, so the scanner instead operates on a view that maps
//! each byte value 0-255 to exactly one `char` (U+0000..=U+00FF). The
//! mapping is reversible: `to_bytes(&to_view(b)) == b` for every byte
//! sequence `b`, including sequences containing the boundary token's own
//! byte pattern. This is what makes `str` search/split safe over binary
//! bodies.

pub(crate) fn to_view(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// The exact inverse of [`to_view`]. Only meaningful for view-produced
/// text, where every `char` is below U+0100.
pub(crate) fn to_bytes(view: &str) -> Vec<u8> {
    view.chars().map(|ch| ch as u8).collect()
}
