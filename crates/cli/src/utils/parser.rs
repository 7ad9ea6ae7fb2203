use anyhow::{Result, bail};
use archive_commands_core::{Selection, SelectionEntry};
use std::path::Path;

/// Turn a command-line path into a selection entry.
///
/// The path is kept relative to `root` the way the server expects it;
/// whether it is a directory is looked up under `root`.
pub fn parse_selection_entry(root: &Path, path_arg: &str) -> Result<SelectionEntry> {
    let path = path_arg.trim().trim_start_matches("./").trim_end_matches('/');
    let name = match Path::new(path).file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_string(),
        None => bail!("Not a file or directory path: {path_arg:?}"),
    };

    Ok(SelectionEntry {
        name,
        path: path.to_string(),
        is_directory: root.join(path).is_dir(),
    })
}

pub fn parse_selection<S: AsRef<str>>(root: &Path, path_args: &[S]) -> Result<Selection> {
    path_args
        .iter()
        .map(|arg| parse_selection_entry(root, arg.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_entry_keeps_relative_path() {
        let entry = parse_selection_entry(Path::new("/nonexistent"), "./data/archive.zip").unwrap();
        assert_eq!(entry, SelectionEntry::file("archive.zip", "data/archive.zip"));
    }

    #[test]
    fn test_directories_are_detected_under_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("plots")).unwrap();

        let entry = parse_selection_entry(temp_dir.path(), "plots/").unwrap();
        assert_eq!(entry, SelectionEntry::directory("plots", "plots"));
    }

    #[test]
    fn test_rejects_paths_without_a_name() {
        assert!(parse_selection_entry(Path::new("."), "..").is_err());
        assert!(parse_selection_entry(Path::new("."), "").is_err());
    }

    #[test]
    fn test_selection_keeps_order() {
        let selection = parse_selection(Path::new("/nonexistent"), &["b.txt", "a.txt"]).unwrap();
        assert_eq!(selection.paths(), vec!["b.txt".to_string(), "a.txt".to_string()]);
    }
}
