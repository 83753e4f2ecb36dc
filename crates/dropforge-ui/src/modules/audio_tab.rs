// crates/dropforge-ui/src/modules/audio_tab.rs
//
// Audio tab: output format, MP3 bitrate, mono downmix. The conversion
// itself is ffmpeg's job — see dropforge-media::audio.

use egui::{RichText, Ui};

use dropforge_core::commands::AppCommand;
use dropforge_core::state::{AppState, AudioFormat, TabKind, MP3_BITRATES};

use super::TabModule;
use crate::helpers::drop_zone::drop_zone;
use crate::theme::DARK_TEXT_DIM;

pub struct AudioTab;

impl TabModule for AudioTab {
    fn title(&self) -> &'static str {
        "Audio"
    }

    fn ui(
        &mut self,
        ui:             &mut Ui,
        state:          &AppState,
        hovering_files: bool,
        cmd:            &mut Vec<AppCommand>,
    ) {
        ui.add_space(6.0);
        ui.label("Drag and drop audio files or folders here for processing.");
        ui.add_space(10.0);

        ui.label(RichText::new("Output Format").size(11.0).color(DARK_TEXT_DIM));
        ui.horizontal_wrapped(|ui| {
            for &fmt in AudioFormat::ALL {
                let selected = state.audio.format == fmt;
                if ui.radio(selected, fmt.label()).clicked() && !selected {
                    cmd.push(AppCommand::SetAudioFormat(fmt));
                }
            }
        });

        ui.add_space(10.0);
        ui.label(RichText::new("MP3 Bitrate (kbps)").size(11.0).color(DARK_TEXT_DIM));
        ui.horizontal(|ui| {
            for &rate in MP3_BITRATES {
                let selected = state.audio.bitrate_kbps == rate;
                if ui.radio(selected, format!("{rate} kbps")).clicked() && !selected {
                    cmd.push(AppCommand::SetAudioBitrate(rate));
                }
            }
        });

        ui.add_space(10.0);
        let mut mono = state.audio.mono;
        if ui.checkbox(&mut mono, "Convert to Mono").changed() {
            cmd.push(AppCommand::SetAudioMono(mono));
        }

        ui.add_space(16.0);
        drop_zone(ui, TabKind::Audio.drop_hint(), hovering_files);
    }
}
