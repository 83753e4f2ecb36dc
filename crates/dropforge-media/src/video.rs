// crates/dropforge-media/src/video.rs
//
// Frame extraction: ffmpeg decodes the clip and writes every Nth frame as a
// numbered PNG under `output/frames/` next to the source.

use std::ffi::OsString;
use std::path::Path;

use anyhow::Result;

use dropforge_core::state::VideoSettings;

use crate::ffmpeg::run_ffmpeg;
use crate::paths::{ensure_output_dir, file_stem, output_dir_for};

/// Extract every `frame_interval`-th frame of one video file.
/// Returns the user-facing status message.
///
/// The `%04d` pattern is expanded by ffmpeg's image muxer. ffmpeg runs
/// without `-y` and with null stdin, so a frame file left over from an
/// earlier run fails this item instead of being overwritten.
pub fn extract_frames(source: &Path, settings: &VideoSettings) -> Result<String> {
    let frames_dir = output_dir_for(source).join("frames");
    ensure_output_dir(&frames_dir)?;

    let pattern = frames_dir.join(format!("{}_%04d.png", file_stem(source)));

    let args: Vec<OsString> = vec![
        "-i".into(),
        source.as_os_str().into(),
        "-vf".into(),
        frame_filter(settings.frame_interval).into(),
        "-vsync".into(),
        "vfr".into(),
        pattern.as_os_str().into(),
    ];
    run_ffmpeg(args)?;
    Ok(format!("Frames extracted to: {}", frames_dir.display()))
}

/// Select filter passing every `interval`-th frame, with timestamps rewritten
/// so the image muxer numbers the survivors consecutively.
///
/// The comma inside `mod()` is escaped — unescaped it would split the
/// filtergraph at the wrong place.
pub fn frame_filter(interval: u32) -> String {
    format!("select=not(mod(n\\,{interval})),setpts=N/TB")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_escapes_the_mod_comma() {
        assert_eq!(frame_filter(3), "select=not(mod(n\\,3)),setpts=N/TB");
    }

    #[test]
    fn every_frame_is_interval_one() {
        assert_eq!(frame_filter(1), "select=not(mod(n\\,1)),setpts=N/TB");
    }
}
