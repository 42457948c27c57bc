/// Hashes `parts` in order, each prefixed by its little-endian byte length, so
/// shifting bytes across a part boundary changes the result.
pub fn u8s_from_parts(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    for part in parts {
        hasher.update(&(part.len() as u64).to_le_bytes());
        hasher.update(part);
    }
    hasher.finalize().into()
}
