//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode alphanumeric character.
fn contains_alphanumeric(text: &str) -> bool {
    text.chars().any(|c| c.is_alphanumeric())
}

/// Counts the words of a translation value.
///
/// A word is a whitespace-separated token with at least one letter or digit,
/// so stray punctuation does not inflate the count.
///
/// # Examples
///
/// ```
/// use trex::utils::count_words;
///
/// assert_eq!(count_words("Hello world"), 2);
/// assert_eq!(count_words("Save - and exit"), 3);
/// assert_eq!(count_words("你好 世界"), 2);
/// assert_eq!(count_words(""), 0);
/// ```
pub fn count_words(text: &str) -> usize {
    text.split_whitespace()
        .filter(|token| contains_alphanumeric(token))
        .count()
}
