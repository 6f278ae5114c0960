// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove every `**` bold marker.
pub fn strip_bold(s: &str) -> String {
    s.replace("**", "")
}

/// Name fragment before a trailing parenthetical: `"Alice (3)"` → `"Alice"`.
pub fn strip_seed(s: &str) -> &str {
    match s.find(" (") {
        Some(i) => s[..i].trim(),
        None => s.trim(),
    }
}

/// First contiguous run of ASCII digits, parsed. None when no digit present.
pub fn first_uint(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    s[start..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  a \t b  "), "a b");
    }

    #[test]
    fn strip_bold_removes_all_markers() {
        assert_eq!(strip_bold("**Alice** def. **Bob**"), "Alice def. Bob");
        assert_eq!(strip_bold("plain"), "plain");
    }

    #[test]
    fn strip_seed_variants() {
        assert_eq!(strip_seed("Alice (3)"), "Alice");
        assert_eq!(strip_seed("Alice (3) (again)"), "Alice");
        assert_eq!(strip_seed(" Bob "), "Bob");
    }

    #[test]
    fn first_uint_scans_past_text() {
        assert_eq!(first_uint("5th"), Some(5));
        assert_eq!(first_uint("finished 12th of 14"), Some(12));
        assert_eq!(first_uint("none"), None);
        assert_eq!(first_uint(""), None);
    }
}
