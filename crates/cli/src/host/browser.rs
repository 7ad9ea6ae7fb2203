use archive_commands_core::{Result, Selection, interfaces::FileBrowser};
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Selection given on the command line; refreshing re-lists the directory
/// the selection lives in
pub struct DirectoryBrowser {
    root: PathBuf,
    selection: Selection,
}

impl DirectoryBrowser {
    pub fn new(root: impl Into<PathBuf>, selection: Selection) -> Self {
        Self {
            root: root.into(),
            selection,
        }
    }

    /// Directory holding the first selected entry
    pub fn listing_dir(&self) -> PathBuf {
        let parent = self
            .selection
            .iter()
            .next()
            .and_then(|entry| Path::new(&entry.path).parent())
            .unwrap_or_else(|| Path::new(""));
        self.root.join(parent)
    }

    /// Names in the listing directory, directories first, each group sorted
    pub fn list(&self) -> io::Result<Vec<String>> {
        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in WalkDir::new(self.listing_dir()).min_depth(1).max_depth(1) {
            let entry = entry.map_err(io::Error::from)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type().is_dir() {
                dirs.push(format!("{name}/"));
            } else {
                files.push(name);
            }
        }
        dirs.sort();
        files.sort();
        dirs.extend(files);
        Ok(dirs)
    }
}

#[async_trait]
impl FileBrowser for DirectoryBrowser {
    fn current_selection(&self) -> Selection {
        self.selection.clone()
    }

    async fn refresh_listing(&self) -> Result<()> {
        let dir = self.listing_dir();
        debug!("Refreshing listing of {}", dir.display());
        let names = self.list()?;

        println!("\n📂 {}", dir.display());
        for name in names {
            println!("   {name}");
        }
        Ok(())
    }
}
