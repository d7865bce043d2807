use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// ECMAScript `\s`: differs from `char::is_whitespace` on U+0085 (not a
/// separator here) and U+FEFF (a separator here).
fn is_js_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r' | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Canonical comparison form of a title.
///
/// Lowercases, strips accents (NFD + combining marks), drops everything that
/// is not `a-z`, `0-9` or whitespace, then sorts the remaining words so that
/// word order does not matter. Total over any input; the empty string maps to
/// the empty string.
pub fn canonicalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_diacritic(*c))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || is_js_space(*c))
        .collect();

    let mut tokens: Vec<&str> = stripped
        .split(is_js_space)
        .filter(|t| !t.is_empty())
        .collect();
    tokens.sort_unstable();
    tokens.join(" ")
}
