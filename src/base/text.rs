//! Text utilities for working with identifier names.

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Split a name into its words.
///
/// Word boundaries are:
/// - `_`, the given `separator`, and any non-identifier character (dropped)
/// - a lowercase letter or digit followed by an uppercase letter (`fooBar`)
/// - the last capital of an acronym followed by a lowercase letter (`HTTPServer`)
///
/// Digits stay attached to the word they follow (`item2Count` -> `item2`, `Count`).
pub fn split_words<'a>(name: &'a str, separator: &str) -> Vec<&'a str> {
    let mut words = Vec::new();

    for chunk in name.split(|c: char| c == '_' || !is_word_character(c)) {
        if separator.is_empty() {
            split_case_boundaries(chunk, &mut words);
        } else {
            for piece in chunk.split(separator) {
                split_case_boundaries(piece, &mut words);
            }
        }
    }

    words
}

fn split_case_boundaries<'a>(chunk: &'a str, words: &mut Vec<&'a str>) {
    let chars: Vec<(usize, char)> = chunk.char_indices().collect();
    let mut start = 0;

    for i in 1..chars.len() {
        let (idx, c) = chars[i];
        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, n)| n);

        let lower_to_upper = c.is_uppercase() && (prev.is_lowercase() || prev.is_numeric());
        let acronym_end =
            c.is_uppercase() && prev.is_uppercase() && next.is_some_and(char::is_lowercase);

        if lower_to_upper || acronym_end {
            words.push(&chunk[start..idx]);
            start = idx;
        }
    }

    if start < chunk.len() {
        words.push(&chunk[start..]);
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character, leaving the rest untouched.
pub fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_word_character() {
        assert!(is_word_character('a'));
        assert!(is_word_character('Z'));
        assert!(is_word_character('_'));
        assert!(is_word_character('9'));
        assert!(!is_word_character(' '));
        assert!(!is_word_character('-'));
    }

    #[test]
    fn test_split_camel_and_pascal() {
        assert_eq!(split_words("fooBarBaz", ""), vec!["foo", "Bar", "Baz"]);
        assert_eq!(split_words("FooBar", ""), vec!["Foo", "Bar"]);
    }

    #[test]
    fn test_split_acronyms() {
        assert_eq!(split_words("HTTPServer", ""), vec!["HTTP", "Server"]);
        assert_eq!(split_words("parseXML", ""), vec!["parse", "XML"]);
    }

    #[test]
    fn test_split_separators() {
        assert_eq!(split_words("__foo_bar", ""), vec!["foo", "bar"]);
        assert_eq!(split_words("my item-name", ""), vec!["my", "item", "name"]);
        assert_eq!(split_words("fooXbar", "X"), vec!["foo", "bar"]);
    }

    #[test]
    fn test_split_keeps_digits_with_word() {
        assert_eq!(split_words("item2Count", ""), vec!["item2", "Count"]);
    }

    #[test]
    fn test_first_char_case() {
        assert_eq!(upper_first("foo"), "Foo");
        assert_eq!(lower_first("FOO"), "fOO");
        assert_eq!(upper_first(""), "");
    }
}
