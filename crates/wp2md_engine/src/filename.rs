use crate::types::DEFAULT_TITLE;

/// Characters that are invalid or reserved across common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Derive the kebab-case `.md` filename for a post title.
///
/// A pure function of the title: reserved characters become hyphens,
/// camelCase boundaries split, whitespace/underscore runs collapse to one
/// hyphen, and the result is lowercased. Two titles that sanitize to the
/// same name overwrite each other, last write wins.
pub fn derive_filename(title: &str) -> String {
    let title = if title.trim().is_empty() {
        DEFAULT_TITLE
    } else {
        title
    };

    let mut cleaned = String::with_capacity(title.len());
    for c in title.chars() {
        cleaned.push(if INVALID_CHARS.contains(&c) { '-' } else { c });
    }

    let mut split = String::with_capacity(cleaned.len() + 4);
    let mut prev_lower = false;
    for c in cleaned.chars() {
        if prev_lower && c.is_ascii_uppercase() {
            split.push('-');
        }
        split.push(c);
        prev_lower = c.is_ascii_lowercase();
    }

    let mut collapsed = String::with_capacity(split.len());
    let mut in_gap = false;
    for c in split.chars() {
        if c.is_whitespace() || c == '_' {
            if !in_gap {
                collapsed.push('-');
            }
            in_gap = true;
        } else {
            collapsed.push(c);
            in_gap = false;
        }
    }

    format!("{}.md", collapsed.to_lowercase())
}
