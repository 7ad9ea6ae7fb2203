//! Turns a validated selection into a service request

use crate::{
    config::ExtensionConfig,
    error::ValidationError,
    types::{ArchiveOperationRequest, Selection, SelectionEntry},
    validation::ARCHIVE_SUFFIX,
};

/// Name used when several entries are archived together
pub const DEFAULT_ARCHIVE_NAME: &str = "archive.zip";

pub fn build_extract_request(entry: &SelectionEntry, config: &ExtensionConfig) -> ArchiveOperationRequest {
    ArchiveOperationRequest::Extract {
        archive_path: entry.path.clone(),
        extract_to_named_folder: config.extract_to_named_folder,
    }
}

/// Name offered to the user before they pick one.
///
/// A single entry gives `<name>.zip`, anything else `archive.zip`.
pub fn default_archive_name(selection: &Selection) -> String {
    match selection.single() {
        Some(entry) => format!("{}{}", entry.name, ARCHIVE_SUFFIX),
        None => DEFAULT_ARCHIVE_NAME.to_string(),
    }
}

/// Build a create request from the selection and the name the user typed.
///
/// The name is trimmed and gets `.zip` appended unless it already ends in it
/// (compared case-insensitively).
pub fn build_create_request(
    selection: &Selection,
    user_supplied_name: &str,
) -> Result<ArchiveOperationRequest, ValidationError> {
    let name = user_supplied_name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if selection.is_empty() {
        return Err(ValidationError::EmptySelection);
    }

    Ok(ArchiveOperationRequest::Create {
        archive_name: with_archive_suffix(name),
        source_paths: selection.paths(),
    })
}

fn with_archive_suffix(name: &str) -> String {
    if name.to_ascii_lowercase().ends_with(ARCHIVE_SUFFIX) {
        name.to_string()
    } else {
        format!("{name}{ARCHIVE_SUFFIX}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archive_name(request: &ArchiveOperationRequest) -> &str {
        match request {
            ArchiveOperationRequest::Create { archive_name, .. } => archive_name,
            other => panic!("expected a create request, got {other:?}"),
        }
    }

    fn three_entries() -> Selection {
        Selection::new(vec![
            SelectionEntry::file("a.txt", "work/a.txt"),
            SelectionEntry::directory("docs", "work/docs"),
            SelectionEntry::file("b.csv", "work/b.csv"),
        ])
    }

    #[test]
    fn test_default_name_single_entry() {
        let selection = Selection::new(vec![SelectionEntry::file("notes", "work/notes")]);
        assert_eq!(default_archive_name(&selection), "notes.zip");
    }

    #[test]
    fn test_default_name_multiple_entries() {
        assert_eq!(default_archive_name(&three_entries()), "archive.zip");
        assert_eq!(default_archive_name(&Selection::default()), "archive.zip");
    }

    #[test]
    fn test_create_appends_suffix_once() {
        let selection = three_entries();
        let request = build_create_request(&selection, "bundle").unwrap();
        assert_eq!(archive_name(&request), "bundle.zip");

        let request = build_create_request(&selection, "a.zip").unwrap();
        assert_eq!(archive_name(&request), "a.zip");

        let request = build_create_request(&selection, "UPPER.ZIP").unwrap();
        assert_eq!(archive_name(&request), "UPPER.ZIP");

        let request = build_create_request(&selection, "report.tar").unwrap();
        assert_eq!(archive_name(&request), "report.tar.zip");
    }

    #[test]
    fn test_create_trims_name() {
        let request = build_create_request(&three_entries(), "  spaced  ").unwrap();
        assert_eq!(archive_name(&request), "spaced.zip");
    }

    #[test]
    fn test_create_keeps_selection_order() {
        let request = build_create_request(&three_entries(), "bundle").unwrap();
        assert_eq!(
            request,
            ArchiveOperationRequest::Create {
                archive_name: "bundle.zip".to_string(),
                source_paths: vec![
                    "work/a.txt".to_string(),
                    "work/docs".to_string(),
                    "work/b.csv".to_string()
                ],
            }
        );
    }

    #[test]
    fn test_create_rejects_blank_name() {
        assert_eq!(build_create_request(&three_entries(), ""), Err(ValidationError::EmptyName));
        assert_eq!(build_create_request(&three_entries(), " \t "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_create_rejects_empty_selection() {
        assert_eq!(
            build_create_request(&Selection::default(), "bundle"),
            Err(ValidationError::EmptySelection)
        );
    }

    #[test]
    fn test_extract_reads_config_flag() {
        let entry = SelectionEntry::file("data.zip", "/a/data.zip");
        assert_eq!(
            build_extract_request(&entry, &ExtensionConfig::new(false)),
            ArchiveOperationRequest::Extract {
                archive_path: "/a/data.zip".to_string(),
                extract_to_named_folder: false,
            }
        );
        assert_eq!(
            build_extract_request(&entry, &ExtensionConfig::default()),
            ArchiveOperationRequest::Extract {
                archive_path: "/a/data.zip".to_string(),
                extract_to_named_folder: true,
            }
        );
    }
}
