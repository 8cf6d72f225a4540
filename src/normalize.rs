//! Accent- and case-insensitive string comparison
//!
//! Name and location filters accept user input like "montrEal" or "Montréal"
//! and must match the canonical strings the API returns. Comparison works on
//! a cleaned form: NFKD decomposition, combining marks stripped, case folded,
//! non-ASCII dropped.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Reduce a string to its cleaned ASCII byte form for comparison.
///
/// Case folding is per-character lowercasing, not full Unicode case folding:
/// characters that only expand under full folding (e.g. 'ß' -> "ss") have no
/// lowercase ASCII form and are dropped by the ASCII filter instead. All NHL
/// name and location matching stays within NFKD-decomposable Latin input,
/// where the two foldings agree.
fn clean(s: &str) -> Vec<u8> {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(|c| c.to_lowercase())
        .filter(|c| c.is_ascii())
        .map(|c| c as u8)
        .collect()
}

/// Check whether two strings are equal after normalizing away accents and
/// case differences.
///
/// # Examples
///
/// ```
/// use nhl_stats_client::normalize::normalized_eq;
///
/// assert!(normalized_eq("Montréal", "montreal"));
/// assert!(!normalized_eq("ab", "abc"));
/// ```
pub fn normalized_eq(orig: &str, search: &str) -> bool {
    clean(orig) == clean(search)
}
