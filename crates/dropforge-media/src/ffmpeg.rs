// crates/dropforge-media/src/ffmpeg.rs
//
// The one place DropForge launches the transcoder CLI. Audio conversion and
// frame extraction both build an argument vector and hand it here.

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};

/// Resolve the transcoder binary: `DROPFORGE_FFMPEG` when set, otherwise
/// `ffmpeg` on PATH.
pub fn ffmpeg_binary() -> PathBuf {
    std::env::var_os("DROPFORGE_FFMPEG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("ffmpeg"))
}

/// Run ffmpeg with `args`, blocking until it exits.
///
/// stdin is null so ffmpeg can never sit on an overwrite prompt — an
/// existing output file fails the run instead, which keeps the
/// never-overwrite rule intact for pattern outputs too.
pub fn run_ffmpeg<I, S>(args: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = ffmpeg_binary();
    let output = Command::new(&bin)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("failed to launch {}", bin.display()))?;

    if !output.status.success() {
        bail!("ffmpeg exited with {}: {}", output.status, stderr_tail(&output.stderr));
    }
    Ok(())
}

/// Last few stderr lines — ffmpeg prints the actual failure at the end,
/// after a screenful of stream info nobody wants in a status label.
fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let mut lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .rev()
        .take(3)
        .collect();
    lines.reverse();
    lines.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stderr_tail_keeps_last_lines_in_order() {
        let raw = b"info line\nmore info\nError opening output\nConversion failed!\n";
        assert_eq!(
            stderr_tail(raw),
            "more info | Error opening output | Conversion failed!"
        );
    }

    #[test]
    fn stderr_tail_skips_blank_lines() {
        let raw = b"only line\n\n\n";
        assert_eq!(stderr_tail(raw), "only line");
    }
}
