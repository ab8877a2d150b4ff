//! Case ID generation
//!
//! New ids continue the numbering of the last case in load order. The
//! policy never scans the case base for an existing id, so a hand-edited
//! or reordered case file can produce duplicates.

/// Minimum width of the numeric part of a generated id
pub const MIN_DIGITS: usize = 2;

/// Mint the id for the case appended after `last_id`.
///
/// All ASCII digits of `last_id` are concatenated and parsed (`K07` → 7,
/// `K1A2` → 12). The result is `prefix` followed by that number plus one,
/// zero padded to [`MIN_DIGITS`]. When there is no last id, no digits, or
/// the number does not fit, `prefix` + `fallback_suffix` is returned.
pub fn next_case_id(last_id: Option<&str>, prefix: &str, fallback_suffix: &str) -> String {
    match last_id.and_then(numeric_suffix) {
        Some(last) => match last.checked_add(1) {
            Some(next) => format!("{prefix}{next:0width$}", width = MIN_DIGITS),
            None => fallback_id(prefix, fallback_suffix),
        },
        None => fallback_id(prefix, fallback_suffix),
    }
}

fn fallback_id(prefix: &str, fallback_suffix: &str) -> String {
    tracing::debug!(prefix, fallback_suffix, "case id fallback");
    format!("{prefix}{fallback_suffix}")
}

/// Digits of `id` read as one number, if any
pub fn numeric_suffix(id: &str) -> Option<u64> {
    let digits: String = id.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
