//! # Note storage
//!
//! Per-day free-text notes, held in memory as the canonical copy and mirrored
//! to a single JSON file.
//!
//! ## Storage format
//!
//! One UTF-8 file containing one top-level JSON object; keys are `YYYY-MM-DD`
//! date strings, values are non-empty note texts:
//!
//! ```text
//! {
//!   "2025-01-01": "médico às 14h",
//!   "2025-04-21": "feriado, loja fechada"
//! }
//! ```
//!
//! There is no schema version and no append log: the file is rewritten in
//! full on every [`NoteStore::persist`].
//!
//! ## Durability rules
//!
//! - **Atomic replace**: persistence writes a uniquely named `.tmp` file in
//!   the same directory and renames it over the canonical file, so a crash
//!   mid-write never leaves a half-written notes file behind.
//! - **Corruption is not fatal**: a missing, unreadable, or syntactically
//!   broken file loads as "no notes". The host is a long-running process; a
//!   bad file must never take it down.
//! - **Legacy migration**: if the canonical file is absent but the configured
//!   legacy path exists, the legacy file is renamed into place once at load.
//!   If the rename fails the legacy file is left untouched and the store
//!   starts empty; data is never deleted on a failed move.
//!
//! ## Ownership and concurrency
//!
//! Exactly one [`NoteStore`] owns the map for its lifetime; there is no
//! internal locking. An embedding host that shares the store across threads
//! must serialize access itself.

mod fs;
mod paths;

pub use fs::NoteStore;
pub use paths::NotePaths;
