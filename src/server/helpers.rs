/// Convert an empty string to `None`, non-empty to `Some`.
pub fn nonempty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Clamp a collection length into a proto `uint32` count.
pub fn count_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
