//! File listing interface

use crate::{error::Result, types::Selection};
use async_trait::async_trait;

/// The file-listing surface the commands act on
#[async_trait]
pub trait FileBrowser: Send + Sync {
    /// Snapshot of the currently selected entries
    fn current_selection(&self) -> Selection;

    /// Re-read the listing after the service changed the directory
    async fn refresh_listing(&self) -> Result<()>;
}
