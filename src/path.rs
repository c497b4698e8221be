//! Path normalization and joining over plain strings.
//!
//! These helpers operate on string paths (local or remote) without touching
//! the filesystem. Backslashes are treated as slashes throughout, so Windows
//! style input normalizes to forward-slash form.

/// Replace every run of slashes or backslashes with a single forward slash.
pub fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;

    for ch in path.chars() {
        if ch == '/' || ch == '\\' {
            if !prev_slash {
                out.push('/');
            }
            prev_slash = true;
        } else {
            out.push(ch);
            prev_slash = false;
        }
    }

    out
}

/// Join path fragments with `/`.
///
/// The first fragment keeps its leading slash (only trailing slashes are
/// trimmed); subsequent fragments are trimmed on both sides. Fragments that
/// trim down to nothing are skipped.
pub fn join(fragments: &[&str]) -> String {
    let is_slash = |c: char| c == '/' || c == '\\';
    let mut parts: Vec<&str> = Vec::with_capacity(fragments.len());

    for (index, fragment) in fragments.iter().enumerate() {
        let piece = if index == 0 {
            fragment.trim_end_matches(is_slash)
        } else {
            fragment.trim_matches(is_slash)
        };

        if !piece.is_empty() {
            parts.push(piece);
        }
    }

    normalize(&parts.join("/"))
}
