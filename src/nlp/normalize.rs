//! Whitespace normalization
//!
//! Both strategies normalize the document before segmentation so that line
//! wrapping in the input never splits or glues sentences.

/// Collapse every run of whitespace (newlines included) into a single space
/// and trim both ends.
///
/// Total and idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
