//! Shell escaping and quoting.
//!
//! The quoting here is the escaping pass whose output
//! [`crate::commandline::build`] knows how to re-tokenize.

/// Escape embedded single quotes so a value can sit inside a single-quoted
/// span: each `'` closes the span, emits an escaped quote, and reopens it.
pub fn escape_single_quotes(value: &str) -> String {
    value.replace('\'', "'\\''")
}

/// Quote one argument for a POSIX shell.
///
/// Plain words pass through untouched. Anything carrying a shell
/// metacharacter gets wrapped in single quotes with embedded quotes
/// escaped, and an empty argument quotes to `''`.
pub fn quote_arg(arg: &str) -> String {
    if arg.is_empty() {
        return "''".to_string();
    }

    const NEEDS_QUOTING: &[char] = &[
        ' ', '\t', '\n', '"', '\'', '\\', '`', '$', '!', '#', '&', '*', '(', ')', '[', ']', '{',
        '}', ';', '|', '<', '>', '?', '~',
    ];

    if arg.contains(NEEDS_QUOTING) {
        format!("'{}'", escape_single_quotes(arg))
    } else {
        arg.to_string()
    }
}

/// Quote arguments and join them into a single command line.
pub fn join_quoted(args: &[String]) -> String {
    args.iter()
        .map(|arg| quote_arg(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_arg_plain_word_unchanged() {
        assert_eq!(quote_arg("version"), "version");
        assert_eq!(quote_arg("--porcelain"), "--porcelain");
    }

    #[test]
    fn quote_arg_wraps_spaces() {
        assert_eq!(quote_arg("multi word"), "'multi word'");
    }

    #[test]
    fn quote_arg_escapes_embedded_single_quote() {
        assert_eq!(quote_arg("it's"), "'it'\\''s'");
    }

    #[test]
    fn quote_arg_empty_becomes_empty_quotes() {
        assert_eq!(quote_arg(""), "''");
    }

    #[test]
    fn join_quoted_builds_command_line() {
        let args = vec!["eval".to_string(), "echo 1;".to_string()];
        assert_eq!(join_quoted(&args), "eval 'echo 1;'");
    }
}
