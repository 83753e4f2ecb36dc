// crates/dropforge-media/src/audio.rs
//
// Audio conversion via the ffmpeg CLI: format change, optional mono
// downmix, and an explicit bitrate for MP3 output.

use std::ffi::OsString;
use std::path::Path;

use anyhow::Result;

use dropforge_core::state::{AudioFormat, AudioSettings};

use crate::ffmpeg::run_ffmpeg;
use crate::paths::{ensure_output_dir, file_stem, output_dir_for, unique_output_path};

/// Convert one audio file into the sibling `output/` directory.
/// Returns the user-facing status message.
pub fn convert_audio_file(source: &Path, settings: &AudioSettings) -> Result<String> {
    let out_dir = output_dir_for(source);
    ensure_output_dir(&out_dir)?;

    // The bitrate suffix is part of the name for every format, so the same
    // clip converted at two bitrates never collides.
    let dest = unique_output_path(
        &out_dir,
        &file_stem(source),
        &format!("_{}kbps", settings.bitrate_kbps),
        settings.format.extension(),
    );

    run_ffmpeg(build_args(source, &dest, settings))?;
    Ok(format!("Audio saved to: {}", dest.display()))
}

/// `-i <src> [-ac 1] [-b:a <kbps>k] <dst>`
///
/// The bitrate flag only applies to MP3 output — the other encoders take
/// their container defaults, as the presets always have.
fn build_args(source: &Path, dest: &Path, settings: &AudioSettings) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-i".into(), source.as_os_str().into()];
    if settings.mono {
        args.push("-ac".into());
        args.push("1".into());
    }
    if settings.format == AudioFormat::Mp3 {
        args.push("-b:a".into());
        args.push(format!("{}k", settings.bitrate_kbps).into());
    }
    args.push(dest.as_os_str().into());
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_as_strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn mp3_gets_bitrate_flag() {
        let settings = AudioSettings {
            format:       AudioFormat::Mp3,
            bitrate_kbps: 192,
            mono:         false,
        };
        let args = build_args(Path::new("in.wav"), Path::new("out.mp3"), &settings);
        assert_eq!(
            args_as_strings(&args),
            vec!["-i", "in.wav", "-b:a", "192k", "out.mp3"]
        );
    }

    #[test]
    fn non_mp3_omits_bitrate_flag() {
        let settings = AudioSettings {
            format:       AudioFormat::Flac,
            bitrate_kbps: 128,
            mono:         false,
        };
        let args = build_args(Path::new("in.mp3"), Path::new("out.flac"), &settings);
        assert_eq!(args_as_strings(&args), vec!["-i", "in.mp3", "out.flac"]);
    }

    #[test]
    fn mono_inserts_channel_flag_before_bitrate() {
        let settings = AudioSettings {
            format:       AudioFormat::Mp3,
            bitrate_kbps: 96,
            mono:         true,
        };
        let args = build_args(Path::new("in.ogg"), Path::new("out.mp3"), &settings);
        assert_eq!(
            args_as_strings(&args),
            vec!["-i", "in.ogg", "-ac", "1", "-b:a", "96k", "out.mp3"]
        );
    }
}
