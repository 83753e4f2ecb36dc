// crates/dropforge-ui/src/modules/text_tab.rs
//
// Text tab: one of three modes — copy, merge, deduplicate words.

use egui::{RichText, Ui};

use dropforge_core::commands::AppCommand;
use dropforge_core::state::{AppState, TabKind, TextMode};

use super::TabModule;
use crate::helpers::drop_zone::drop_zone;
use crate::theme::DARK_TEXT_DIM;

pub struct TextTab;

impl TabModule for TextTab {
    fn title(&self) -> &'static str {
        "Text"
    }

    fn ui(
        &mut self,
        ui:             &mut Ui,
        state:          &AppState,
        hovering_files: bool,
        cmd:            &mut Vec<AppCommand>,
    ) {
        ui.add_space(6.0);
        ui.label("Drag and drop text files or folders here for processing.");
        ui.add_space(10.0);

        ui.label(RichText::new("Processing Mode").size(11.0).color(DARK_TEXT_DIM));
        for &mode in TextMode::ALL {
            let selected = state.text.mode == mode;
            if ui.radio(selected, mode.label()).clicked() && !selected {
                cmd.push(AppCommand::SetTextMode(mode));
            }
        }

        ui.add_space(4.0);
        ui.label(
            RichText::new(state.text.mode.description())
                .size(10.0)
                .color(DARK_TEXT_DIM),
        );

        ui.add_space(16.0);
        drop_zone(ui, TabKind::Text.drop_hint(), hovering_files);
    }
}
