use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const NOTES_FILENAME: &str = "notes.json";

/// Where a [`super::NoteStore`] reads and writes its file.
///
/// Paths are explicit configuration: tests point them at temporary
/// directories, hosts at whatever their platform hands them (a screen-reader
/// host would pass its own config directory here).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePaths {
    file: PathBuf,
    legacy_file: Option<PathBuf>,
}

impl NotePaths {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            legacy_file: None,
        }
    }

    /// Adds a legacy location to migrate from on first load.
    pub fn with_legacy(mut self, legacy_file: impl Into<PathBuf>) -> Self {
        self.legacy_file = Some(legacy_file.into());
        self
    }

    /// The canonical notes file.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// The pre-migration location, if one is configured.
    pub fn legacy_file(&self) -> Option<&Path> {
        self.legacy_file.as_deref()
    }

    /// Platform-appropriate per-user location (`notes.json` under the user's
    /// data directory). `None` when no home directory can be determined.
    pub fn user_default() -> Option<Self> {
        let dirs = ProjectDirs::from("com", "folhinha", "folhinha")?;
        Some(Self::new(dirs.data_dir().join(NOTES_FILENAME)))
    }
}
