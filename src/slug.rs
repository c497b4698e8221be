//! String slug generation.
//!
//! Turns arbitrary text into a normalized, lowercase, separator-joined
//! identifier: camelCase boundaries become separators, symbol runs collapse,
//! and non-ASCII letters are transliterated to their closest ASCII
//! approximation. An empty result is a valid output, not an error.

use deunicode::deunicode;

/// Generate a slug with the default `-` separator.
pub fn slug(input: &str) -> String {
    slug_with(input, '-', false)
}

/// Generate a slug with an explicit separator.
///
/// When `keep_common_separators` is true, `-` and `_` already present in the
/// input survive as separators instead of collapsing into the primary one.
pub fn slug_with(input: &str, separator: char, keep_common_separators: bool) -> String {
    let mut seps: Vec<char> = vec![separator];
    if keep_common_separators {
        for common in ['-', '_'] {
            if !seps.contains(&common) {
                seps.push(common);
            }
        }
    }

    let spaced = mark_word_boundaries(input.trim(), separator, &seps);
    let replaced = replace_symbol_runs(&spaced, separator, &seps);
    let ascii = deunicode(&replaced);
    let cleaned = drop_non_word(&ascii, &seps);
    let trimmed = cleaned
        .trim()
        .trim_matches(|c: char| seps.contains(&c));
    let collapsed = collapse_separator_runs(trimmed, separator, &seps);

    collapsed.to_lowercase()
}

/// Insert the separator before every uppercase letter that is not already
/// preceded by an uppercase letter or a separator-set character.
fn mark_word_boundaries(input: &str, separator: char, seps: &[char]) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    let mut prev: Option<char> = None;

    for ch in input.chars() {
        if ch.is_uppercase() {
            let at_boundary = match prev {
                Some(p) => !(p.is_uppercase() || seps.contains(&p)),
                None => true,
            };
            if at_boundary {
                out.push(separator);
            }
        }
        out.push(ch);
        prev = Some(ch);
    }

    out
}

/// Replace every maximal run of characters that are neither letters, digits,
/// nor separator-set characters with a single separator.
fn replace_symbol_runs(input: &str, separator: char, seps: &[char]) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;

    for ch in input.chars() {
        if ch.is_alphabetic() || ch.is_numeric() || seps.contains(&ch) {
            out.push(ch);
            in_run = false;
        } else if !in_run {
            out.push(separator);
            in_run = true;
        }
    }

    out
}

/// Drop every character that is not a word character (letter, digit,
/// underscore) or a separator-set character.
fn drop_non_word(input: &str, seps: &[char]) -> String {
    input
        .chars()
        .filter(|&ch| ch.is_alphanumeric() || ch == '_' || seps.contains(&ch))
        .collect()
}

/// Collapse runs of two or more separator-set characters into one primary
/// separator. Lone separators pass through unchanged.
fn collapse_separator_runs(input: &str, separator: char, seps: &[char]) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending: Vec<char> = Vec::new();

    for ch in input.chars() {
        if seps.contains(&ch) {
            pending.push(ch);
            continue;
        }
        flush_separators(&mut out, &pending, separator);
        pending.clear();
        out.push(ch);
    }
    flush_separators(&mut out, &pending, separator);

    out
}

fn flush_separators(out: &mut String, pending: &[char], separator: char) {
    match pending.len() {
        0 => {}
        1 => out.push(pending[0]),
        _ => out.push(separator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_splits_camel_case() {
        assert_eq!(slug("CamelCaseValue"), "camel-case-value");
        assert_eq!(slug("someCamelValue"), "some-camel-value");
    }

    #[test]
    fn slug_keeps_uppercase_runs_together() {
        assert_eq!(slug("HTTPServer"), "httpserver");
    }

    #[test]
    fn slug_replaces_punctuation() {
        assert_eq!(slug("Hello, World!"), "hello-world");
    }

    #[test]
    fn slug_collapses_whitespace() {
        assert_eq!(slug("  multiple   spaces  "), "multiple-spaces");
    }

    #[test]
    fn slug_transliterates_diacritics() {
        assert_eq!(slug("Élan vital"), "elan-vital");
        assert_eq!(slug("über cool"), "uber-cool");
    }

    #[test]
    fn slug_preserves_digits() {
        assert_eq!(slug("Plugin v2"), "plugin-v2");
    }

    #[test]
    fn slug_folds_common_separators_by_default() {
        assert_eq!(slug("Some_Value"), "some-value");
        assert_eq!(slug("foo--bar__baz"), "foo-bar-baz");
    }

    #[test]
    fn slug_with_keeps_common_separators_when_asked() {
        assert_eq!(slug_with("Some_Value-Here", '-', true), "some_value-here");
    }

    #[test]
    fn slug_with_custom_separator() {
        assert_eq!(slug_with("CamelCase Value", '_', false), "camel_case_value");
    }

    #[test]
    fn slug_of_empty_or_symbol_only_input_is_empty() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("!@#$%"), "");
        assert_eq!(slug("   "), "");
    }

    #[test]
    fn slug_is_idempotent() {
        for input in [
            "CamelCaseValue",
            "Hello, World!",
            "  multiple   spaces  ",
            "Élan vital",
            "foo--bar__baz",
            "",
        ] {
            let once = slug(input);
            assert_eq!(slug(&once), once, "slug not idempotent for {:?}", input);
        }
    }
}
