// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Resolve a user-supplied output hint: empty → default filename in the
/// working directory, directory (existing or trailing-slash hint) → default
/// filename inside it, anything else → taken as the file path.
pub fn resolve_out_path(
    user_o: &str,
    default_filename: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if user_o.is_empty() {
        return Ok(PathBuf::from(default_filename));
    }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hint_uses_default_name() {
        let p = resolve_out_path("", "hockey-data.json").unwrap();
        assert_eq!(p, PathBuf::from("hockey-data.json"));
    }

    #[test]
    fn file_hint_is_kept_verbatim() {
        let p = resolve_out_path("snapshot.json", "hockey-data.json").unwrap();
        assert_eq!(p, PathBuf::from("snapshot.json"));
    }

    #[test]
    fn dir_hint_gets_default_name_appended() {
        let mut dir = std::env::temp_dir();
        dir.push("fh_file_dir_hint");
        let _ = fs::remove_dir_all(&dir);

        let hint = format!("{}/", dir.display());
        let p = resolve_out_path(&hint, "hockey-data.json").unwrap();
        assert!(p.ends_with("hockey-data.json"));
        assert!(dir.is_dir());

        let _ = fs::remove_dir_all(&dir);
    }
}
