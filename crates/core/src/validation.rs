//! Selection checks deciding whether a command may run

use crate::{
    error::ValidationError,
    types::{Selection, SelectionEntry},
};

/// Extension (without the dot) of the only archive format the service handles
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Suffix every created archive name ends with
pub const ARCHIVE_SUFFIX: &str = ".zip";

/// Whether the entry's name ends in a recognized archive extension.
///
/// Names without a `.` are never archives.
pub fn is_archive(entry: &SelectionEntry) -> bool {
    entry
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ARCHIVE_EXTENSION))
}

/// Extract is legal for exactly one selected entry named like an archive
pub fn validate_for_extract(selection: &Selection) -> bool {
    check_extract(selection).is_ok()
}

/// Create is legal for any non-empty selection
pub fn validate_for_create(selection: &Selection) -> bool {
    check_create(selection).is_ok()
}

/// Like [`validate_for_extract`], returning the archive entry or the reason
/// it was refused
pub fn check_extract(selection: &Selection) -> Result<&SelectionEntry, ValidationError> {
    let entry = selection
        .single()
        .ok_or(ValidationError::SelectionCount(selection.len()))?;

    if !is_archive(entry) {
        return Err(ValidationError::NotAnArchive(entry.name.clone()));
    }

    Ok(entry)
}

pub fn check_create(selection: &Selection) -> Result<(), ValidationError> {
    if selection.is_empty() {
        return Err(ValidationError::EmptySelection);
    }
    Ok(())
}
