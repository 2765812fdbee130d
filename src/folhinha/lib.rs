//! # Folhinha Architecture
//!
//! Folhinha is a **UI-agnostic calendar-companion library** for the data
//! behind a Brazilian wall calendar (the "folhinha"): national holidays,
//! lunar phases, month navigation, and per-day notes. It has no opinion
//! about how any of it is shown.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (screen-reader plugin, GUI, TUI, bot...)              │
//! │  - Owns presentation, focus, and announcement timing        │
//! │  - Owns the log sink (this crate only emits `log` records)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Folhinha (this crate)                                      │
//! │  - Pure calendar math: holidays, moon, month grids          │
//! │  - NoteStore: per-day notes with atomic JSON persistence    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Apart from the note file the [`store`] module owns, code here:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result`, `Option`, plain values)
//! - **Never** writes to stdout/stderr
//! - **Never** assumes a terminal, a GUI, or a speech synthesizer
//!
//! Human-facing strings (holiday names, phase labels) are Portuguese data the
//! host is free to speak, print, or replace.
//!
//! ## Module Overview
//!
//! - [`holidays`]: Easter computus, movable dates, and the [`holidays::HolidayCalendar`]
//! - [`moon`]: lunar phase estimation and contiguous phase ranges
//! - [`month`]: month grids, grid navigation, and day-of-year arithmetic
//! - [`store`]: the per-day [`store::NoteStore`] and its file locations
//! - [`model`]: core data types ([`model::Holiday`], [`model::MoonPhase`])
//! - [`error`]: error types

pub mod error;
pub mod holidays;
pub mod model;
pub mod month;
pub mod moon;
pub mod store;
