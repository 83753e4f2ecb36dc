// crates/dropforge-ui/src/modules/video_tab.rs
//
// Video tab: frame-sampling interval for extraction. ffmpeg writes the
// numbered PNGs — see dropforge-media::video.

use egui::{RichText, Ui};

use dropforge_core::commands::AppCommand;
use dropforge_core::state::{AppState, TabKind, FRAME_INTERVALS};

use super::TabModule;
use crate::helpers::drop_zone::drop_zone;
use crate::helpers::format::nth_frame_label;
use crate::theme::DARK_TEXT_DIM;

pub struct VideoTab;

impl TabModule for VideoTab {
    fn title(&self) -> &'static str {
        "Video"
    }

    fn ui(
        &mut self,
        ui:             &mut Ui,
        state:          &AppState,
        hovering_files: bool,
        cmd:            &mut Vec<AppCommand>,
    ) {
        ui.add_space(6.0);
        ui.label("Drag and drop video files or folders here for processing.");
        ui.add_space(10.0);

        ui.label(RichText::new("Extract every nth frame").size(11.0).color(DARK_TEXT_DIM));
        for &interval in FRAME_INTERVALS {
            let selected = state.video.frame_interval == interval;
            if ui.radio(selected, nth_frame_label(interval)).clicked() && !selected {
                cmd.push(AppCommand::SetVideoInterval(interval));
            }
        }

        ui.add_space(4.0);
        ui.label(
            RichText::new("Frames are saved as numbered PNGs under output/frames/.")
                .size(10.0)
                .color(DARK_TEXT_DIM),
        );

        ui.add_space(16.0);
        drop_zone(ui, TabKind::Video.drop_hint(), hovering_files);
    }
}
