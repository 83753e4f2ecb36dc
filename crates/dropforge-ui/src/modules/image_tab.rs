// crates/dropforge-ui/src/modules/image_tab.rs
//
// Images tab: square resize resolution + optional white inner margin.
// Every processed image also gets the fixed sharpening pass — that is part
// of the preset, not a control.

use egui::{RichText, Ui};

use dropforge_core::commands::AppCommand;
use dropforge_core::state::{AppState, ImageResolution, TabKind};

use super::TabModule;
use crate::helpers::drop_zone::drop_zone;
use crate::theme::DARK_TEXT_DIM;

pub struct ImageTab;

impl TabModule for ImageTab {
    fn title(&self) -> &'static str {
        "Images"
    }

    fn ui(
        &mut self,
        ui:             &mut Ui,
        state:          &AppState,
        hovering_files: bool,
        cmd:            &mut Vec<AppCommand>,
    ) {
        ui.add_space(6.0);
        ui.label("Drag and drop images or folders here for processing.");
        ui.add_space(10.0);

        ui.label(RichText::new("Resize Options").size(11.0).color(DARK_TEXT_DIM));
        ui.horizontal(|ui| {
            for &res in ImageResolution::ALL {
                let selected = state.image.resolution == res;
                if ui.radio(selected, res.label()).clicked() && !selected {
                    cmd.push(AppCommand::SetImageResolution(res));
                }
            }
        });

        ui.add_space(10.0);
        let mut margin = state.image.add_margin;
        if ui.checkbox(&mut margin, "Add 16-pixel margin").changed() {
            cmd.push(AppCommand::SetImageMargin(margin));
        }

        ui.add_space(4.0);
        ui.label(
            RichText::new("Images are center-cropped to a square, resized, and sharpened.")
                .size(10.0)
                .color(DARK_TEXT_DIM),
        );

        ui.add_space(16.0);
        drop_zone(ui, TabKind::Image.drop_hint(), hovering_files);
    }
}
