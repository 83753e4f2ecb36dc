// crates/dropforge-ui/src/modules/mod.rs
//
// Module registry. To add a new tab:
//   1. Create modules/mytab.rs implementing TabModule
//   2. Add `pub mod mytab;` below
//   3. Add the TabKind variant and one match arm in app.rs

pub mod audio_tab;
pub mod image_tab;
pub mod text_tab;
pub mod video_tab;

use dropforge_core::commands::AppCommand;
use dropforge_core::state::AppState;
use egui::Ui;

/// Every tab implements this trait.
/// Modules read state, emit commands — they never mutate state directly.
pub trait TabModule {
    fn title(&self) -> &'static str;
    /// `hovering_files` is true while an OS drag is over the window, so the
    /// tab can light up its drop zone.
    fn ui(
        &mut self,
        ui:             &mut Ui,
        state:          &AppState,
        hovering_files: bool,
        cmd:            &mut Vec<AppCommand>,
    );
}
