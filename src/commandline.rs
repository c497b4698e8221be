//! Command-line re-tokenization.
//!
//! Rebuilds an argument vector from a command string that has already been
//! through a shell-escaping pass (see [`crate::shell`]). Tokens that were
//! split apart inside a quoted span are merged back into one token, and
//! unescaped quote characters are stripped from the output.
//!
//! Unbalanced quoting produces best-effort merging; that is a documented
//! limitation, not an error channel.

/// Input to [`build`]: either a single command string or an already-split
/// argument vector.
pub enum CommandInput {
    Line(String),
    Argv(Vec<String>),
}

impl From<&str> for CommandInput {
    fn from(value: &str) -> Self {
        CommandInput::Line(value.to_string())
    }
}

impl From<String> for CommandInput {
    fn from(value: String) -> Self {
        CommandInput::Line(value)
    }
}

impl From<Vec<String>> for CommandInput {
    fn from(value: Vec<String>) -> Self {
        CommandInput::Argv(value)
    }
}

impl From<&[String]> for CommandInput {
    fn from(value: &[String]) -> Self {
        CommandInput::Argv(value.to_vec())
    }
}

/// Build an argument vector from a command line.
///
/// An argument vector passes through with empty entries filtered out. A
/// command string is split on single spaces and re-merged wherever a quoted
/// span was split across tokens.
pub fn build(input: impl Into<CommandInput>) -> Vec<String> {
    match input.into() {
        CommandInput::Argv(args) => args.into_iter().filter(|arg| !arg.is_empty()).collect(),
        CommandInput::Line(line) => build_from_line(&line),
    }
}

fn build_from_line(line: &str) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }

    let tokens: Vec<&str> = line.split(' ').collect();

    if tokens.len() == 1 {
        return vec![tokens[0].to_string()];
    }

    let mut result: Vec<String> = Vec::with_capacity(tokens.len());
    let mut open = false;

    for token in tokens {
        let quotes = count_unescaped_quotes(token);

        // A token seen while a span is open belongs to the previous one;
        // rejoin them with the space the split consumed.
        let merged = if open {
            match result.pop() {
                Some(prev) => format!("{} {}", prev, token),
                None => token.to_string(),
            }
        } else {
            token.to_string()
        };

        // An odd quote count opens or closes a span. The truthiness compare
        // is carried over verbatim from the long-standing tokenizer behavior,
        // including what it does with 3+ quotes in one token.
        if quotes % 2 == 1 {
            open = (quotes != 0) != open;
        }

        result.push(strip_unescaped_quotes(&merged));
    }

    result
}

/// Count `"` and `'` characters not immediately preceded by a backslash.
fn count_unescaped_quotes(token: &str) -> usize {
    let mut count = 0;
    let mut prev: Option<char> = None;

    for ch in token.chars() {
        if (ch == '"' || ch == '\'') && prev != Some('\\') {
            count += 1;
        }
        prev = Some(ch);
    }

    count
}

/// Remove `"` and `'` characters not immediately preceded by a backslash.
fn strip_unescaped_quotes(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut prev: Option<char> = None;

    for ch in token.chars() {
        if (ch == '"' || ch == '\'') && prev != Some('\\') {
            prev = Some(ch);
            continue;
        }
        out.push(ch);
        prev = Some(ch);
    }

    out
}
