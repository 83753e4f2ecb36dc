// crates/dropforge-core/src/commands.rs
//
// Every user action in DropForge is expressed as an AppCommand.
// Modules emit these; app.rs processes them after the UI pass.
// Adding a new control = add a variant here + one match arm in app.rs.

use std::path::PathBuf;

use crate::state::{AudioFormat, ImageResolution, TabKind, TextMode};

#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Tabs ─────────────────────────────────────────────────────────────────
    SelectTab(TabKind),

    // ── Audio settings ───────────────────────────────────────────────────────
    SetAudioFormat(AudioFormat),
    SetAudioBitrate(u32),
    SetAudioMono(bool),

    // ── Image settings ───────────────────────────────────────────────────────
    SetImageResolution(ImageResolution),
    SetImageMargin(bool),

    // ── Text settings ────────────────────────────────────────────────────────
    SetTextMode(TextMode),

    // ── Video settings ───────────────────────────────────────────────────────
    SetVideoInterval(u32),

    // ── Processing ───────────────────────────────────────────────────────────
    /// Raw paths dropped onto the window while `tab` was active. app.rs
    /// expands directories, filters by the tab's extensions, and hands the
    /// surviving files to the worker as one batch.
    ProcessDrop { tab: TabKind, paths: Vec<PathBuf> },

    // ── Status bar ───────────────────────────────────────────────────────────
    ClearStatus,
}
