//! Common cavity-count table — the quick-pick contract.
//!
//! These are the mold layouts the form offers as one-keystroke picks.
//! Free-text entry feeds the same field; last write wins.

/// Common mold cavity counts, ascending.
pub const COMMON_CAVITY_COUNTS: [u32; 11] = [1, 2, 4, 6, 8, 12, 16, 24, 32, 48, 72];

/// True if `count` is one of the quick-pick values.
pub fn is_common(count: u32) -> bool {
    COMMON_CAVITY_COUNTS.contains(&count)
}
