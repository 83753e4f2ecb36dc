// crates/dropforge-media/src/paths.rs
// Single source of truth for where DropForge writes its outputs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the sibling directory all outputs land in.
pub const OUTPUT_DIR: &str = "output";

/// The `output/` directory next to `source`.
pub fn output_dir_for(source: &Path) -> PathBuf {
    source
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(OUTPUT_DIR)
}

/// Create `dir` (and any missing parents).
pub fn ensure_output_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// File stem as an owned string (lossy for non-UTF-8 names).
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// First free path of the form `{stem}{suffix}.{ext}` in `dir`.
///
/// While the candidate exists, `_{NNN}` is appended with a zero-padded
/// counter starting at 001, so an existing output is never overwritten.
pub fn unique_output_path(dir: &Path, stem: &str, suffix: &str, ext: &str) -> PathBuf {
    let mut candidate = dir.join(format!("{stem}{suffix}.{ext}"));
    let mut counter = 1u32;
    while candidate.exists() {
        candidate = dir.join(format!("{stem}{suffix}_{counter:03}.{ext}"));
        counter += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn output_dir_is_sibling() {
        let dir = output_dir_for(Path::new("/media/song.mp3"));
        assert_eq!(dir, Path::new("/media/output"));
    }

    #[test]
    fn no_collision_uses_plain_name() {
        let tmp = tempfile::tempdir().unwrap();
        let path = unique_output_path(tmp.path(), "clip", "_128kbps", "mp3");
        assert_eq!(path.file_name().unwrap(), "clip_128kbps.mp3");
    }

    #[test]
    fn collision_appends_padded_counter() {
        let tmp = tempfile::tempdir().unwrap();
        File::create(tmp.path().join("clip.txt")).unwrap();

        let path = unique_output_path(tmp.path(), "clip", "", "txt");
        assert_eq!(path.file_name().unwrap(), "clip_001.txt");
    }

    #[test]
    fn counter_increments_past_existing_outputs() {
        let tmp = tempfile::tempdir().unwrap();
        File::create(tmp.path().join("clip.txt")).unwrap();
        File::create(tmp.path().join("clip_001.txt")).unwrap();
        File::create(tmp.path().join("clip_002.txt")).unwrap();

        let path = unique_output_path(tmp.path(), "clip", "", "txt");
        assert_eq!(path.file_name().unwrap(), "clip_003.txt");
    }

    #[test]
    fn suffix_sits_between_stem_and_counter() {
        let tmp = tempfile::tempdir().unwrap();
        File::create(tmp.path().join("photo_resized_512x512.png")).unwrap();

        let path = unique_output_path(tmp.path(), "photo", "_resized_512x512", "png");
        assert_eq!(path.file_name().unwrap(), "photo_resized_512x512_001.png");
    }
}
