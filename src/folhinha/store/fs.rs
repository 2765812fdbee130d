use super::NotePaths;
use crate::error::{FolhinhaError, Result};
use chrono::NaiveDate;
use log::{error, info, warn};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use uuid::Uuid;

/// The per-day note store: an in-memory map as the canonical copy, a JSON
/// file as its durable mirror.
///
/// Opening never fails: every load problem degrades to an empty map (see
/// the [module docs](super)). Only [`NoteStore::persist`] reports errors,
/// and a failed persist leaves the in-memory map intact so the caller can
/// retry.
pub struct NoteStore {
    paths: NotePaths,
    notes: BTreeMap<NaiveDate, String>,
}

impl NoteStore {
    /// Loads the store: ensures the directory exists (best effort), migrates
    /// the legacy file if configured, then reads the canonical file.
    pub fn open(paths: NotePaths) -> Self {
        let notes = load_notes(&paths);
        Self { paths, notes }
    }

    pub fn paths(&self) -> &NotePaths {
        &self.paths
    }

    /// The note for `date`, if any.
    pub fn note(&self, date: NaiveDate) -> Option<&str> {
        self.notes.get(&date).map(String::as_str)
    }

    pub fn has_note(&self, date: NaiveDate) -> bool {
        self.notes.contains_key(&date)
    }

    /// Sets the note for `date` to the trimmed `text`; an empty result
    /// removes the entry instead. The map never holds an empty note.
    ///
    /// Idempotent: repeating a call changes nothing further. Only the
    /// in-memory map is touched; call [`NoteStore::persist`] afterwards.
    pub fn set_note(&mut self, date: NaiveDate, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.notes.remove(&date);
        } else {
            self.notes.insert(date, trimmed.to_string());
        }
    }

    /// All notes, date-ordered.
    pub fn notes(&self) -> &BTreeMap<NaiveDate, String> {
        &self.notes
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &str)> {
        self.notes.iter().map(|(date, text)| (*date, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Writes the whole map to the canonical file via a temporary file and an
    /// atomic rename.
    ///
    /// On failure the temporary file is removed (best effort) and the error
    /// is returned; the canonical file is either the old complete content or
    /// the new complete content, never a mix.
    pub fn persist(&self) -> Result<()> {
        let file = self.paths.file();
        let dir = store_dir(file);
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(&self.notes)?;
        let tmp = dir.join(format!(".notes-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, json)
            .and_then(|()| fs::rename(&tmp, file))
            .map_err(|err| {
                let _ = fs::remove_file(&tmp);
                FolhinhaError::Io(err)
            })
    }
}

/// Directory holding the notes file; `.` for a bare filename.
fn store_dir(file: &Path) -> &Path {
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

fn load_notes(paths: &NotePaths) -> BTreeMap<NaiveDate, String> {
    ensure_store_dir(paths.file());
    migrate_legacy(paths);

    let raw = match fs::read_to_string(paths.file()) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(err) => {
            warn!(
                "could not read notes file {}: {err}; starting with no notes",
                paths.file().display()
            );
            return BTreeMap::new();
        }
    };

    let parsed: BTreeMap<NaiveDate, String> = match serde_json::from_str(&raw) {
        Ok(map) => map,
        Err(err) => {
            warn!(
                "notes file {} is corrupt: {err}; starting with no notes",
                paths.file().display()
            );
            return BTreeMap::new();
        }
    };

    // Hand-edited files may carry blank entries; the map never holds one
    parsed
        .into_iter()
        .filter_map(|(date, text)| {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| (date, trimmed.to_string()))
        })
        .collect()
}

/// Best-effort directory creation at load time. Failure is logged and the
/// store degrades to an empty map; persist reports its own errors later.
fn ensure_store_dir(file: &Path) {
    let dir = store_dir(file);
    if dir.is_dir() {
        return;
    }
    if let Err(err) = fs::create_dir_all(dir) {
        error!("could not create notes directory {}: {err}", dir.display());
    }
}

/// One-time relocation from the legacy path, only when the canonical file
/// does not exist yet. A failed rename keeps the legacy file in place.
fn migrate_legacy(paths: &NotePaths) {
    let Some(legacy) = paths.legacy_file() else {
        return;
    };
    if paths.file().exists() || !legacy.exists() {
        return;
    }
    match fs::rename(legacy, paths.file()) {
        Ok(()) => info!(
            "migrated notes from {} to {}",
            legacy.display(),
            paths.file().display()
        ),
        Err(err) => error!(
            "could not migrate notes from {}: {err}; legacy file left in place",
            legacy.display()
        ),
    }
}
