// src/core/md.rs
//
// Line-level helpers for the league history Markdown dialect. Specs decide
// which labels and markers matter; these only know how to cut lines apart.

/// Index of the first line containing `needle`.
pub fn find_line(lines: &[&str], needle: &str) -> Option<usize> {
    lines.iter().position(|l| l.contains(needle))
}

/// Split a `|`-delimited table row into trimmed cells, dropping the empty
/// fragments the leading/trailing delimiters produce.
pub fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| s!(c))
        .collect()
}

/// Remove a label (with its `- ` bullet prefix when present) from a line and
/// return the trimmed remainder. Only the first occurrence is removed.
pub fn strip_label(line: &str, label: &str) -> String {
    let bulleted = join!("- ", label);
    let stripped = if line.contains(&bulleted) {
        line.replacen(&bulleted, "", 1)
    } else {
        line.replacen(label, "", 1)
    };
    stripped.trim().to_string()
}

/// Split a matchup list on the `•` separator into trimmed, non-empty parts.
pub fn split_bullets(s: &str) -> Vec<String> {
    s.split('•')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(|m| s!(m))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_cells_drops_delimiter_edges() {
        assert_eq!(
            split_cells("| Alice | Ice Hawks | 1 |"),
            vec!["Alice", "Ice Hawks", "1"]
        );
    }

    #[test]
    fn split_cells_keeps_dash_cell() {
        assert_eq!(split_cells("| Carol | - |"), vec!["Carol", "-"]);
    }

    #[test]
    fn strip_label_removes_bullet_and_label() {
        assert_eq!(
            strip_label("- *Finals:* Alice def. Bob", "*Finals:*"),
            "Alice def. Bob"
        );
    }

    #[test]
    fn strip_label_without_bullet_prefix() {
        assert_eq!(
            strip_label("*Finals:* Alice def. Bob", "*Finals:*"),
            "Alice def. Bob"
        );
    }

    #[test]
    fn split_bullets_trims_parts() {
        assert_eq!(
            split_bullets(" Alice def. Bob • Carol def. Dan "),
            vec!["Alice def. Bob", "Carol def. Dan"]
        );
        assert!(split_bullets("  ").is_empty());
    }

    #[test]
    fn find_line_first_match_wins() {
        let lines = ["a", "x marker", "y marker"];
        assert_eq!(find_line(&lines, "marker"), Some(1));
        assert_eq!(find_line(&lines, "absent"), None);
    }
}
