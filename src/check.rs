//! # Check Mode
//!
//! Compares the generated document against a previously written file so CI
//! can fail when the pasted declarations have drifted from the generator.

use std::path::Path;

use similar::{ChangeTag, TextDiff};

/// Compares the generated document against the file at `path`
///
/// Prints a line diff to stderr when they differ. Returns `true` if the file
/// is missing or its contents differ from `generated`.
pub fn diff(path: &Path, generated: &str) -> bool {
    let Ok(old) = std::fs::read_to_string(path) else {
        eprintln!("Would create {}", path.display());
        return true;
    };
    if old == generated {
        return false;
    }
    let diff = TextDiff::from_lines(old.as_str(), generated);
    eprintln!("Diff for {}:", path.display());
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        eprint!("{sign}{change}");
    }
    true
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    #[test]
    fn up_to_date() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"generated\n").unwrap();
        assert!(!super::diff(file.path(), "generated\n"));
    }

    #[test]
    fn drifted() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"stale\n").unwrap();
        assert!(super::diff(file.path(), "generated\n"));
    }

    #[test]
    fn missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(super::diff(&dir.path().join("terms.cpp"), "generated\n"));
    }
}
