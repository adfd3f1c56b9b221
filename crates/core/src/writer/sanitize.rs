//! Filename sanitization.

/// Reduce a title to characters that are safe in a filename.
///
/// Keeps alphanumerics (any script), spaces, hyphens and underscores and
/// drops everything else. "Alphanumeric" is the Unicode `Alphabetic` or
/// `Numeric` property, so combining vowel signs with `Other_Alphabetic`
/// (Devanagari matras, Thai vowels) are kept along with their base letters.
/// Never fails; the result may be empty.
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect()
}
