// crates/dropforge-media/src/discover.rs
//
// Expands the raw paths from a drop event into the flat file list a batch
// actually processes. A dropped directory is walked recursively; everything
// is filtered by the active tab's extension list.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Collect the files under `paths` whose extension is in `exts`.
///
/// Extension matching is ASCII case-insensitive so `SONG.MP3` drops work.
/// Dropped files keep their drop order; directory contents follow in walk
/// order. Paths that are neither matching files nor directories are ignored.
pub fn collect_files(paths: &[PathBuf], exts: &[&str]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).into_iter().filter_map(Result::ok) {
                if entry.file_type().is_file() && matches_ext(entry.path(), exts) {
                    files.push(entry.into_path());
                }
            }
        } else if path.is_file() && matches_ext(path, exts) {
            files.push(path.clone());
        }
    }
    files
}

fn matches_ext(path: &Path, exts: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| exts.iter().any(|x| e.eq_ignore_ascii_case(x)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn direct_file_passes_filter() {
        let tmp = tempfile::tempdir().unwrap();
        let song = tmp.path().join("song.mp3");
        touch(&song);

        let files = collect_files(&[song.clone()], &["mp3"]);
        assert_eq!(files, vec![song]);
    }

    #[test]
    fn wrong_extension_is_dropped() {
        let tmp = tempfile::tempdir().unwrap();
        let doc = tmp.path().join("notes.txt");
        touch(&doc);

        assert!(collect_files(&[doc], &["mp3"]).is_empty());
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let tmp = tempfile::tempdir().unwrap();
        let song = tmp.path().join("SONG.MP3");
        touch(&song);

        assert_eq!(collect_files(&[song.clone()], &["mp3"]), vec![song]);
    }

    #[test]
    fn directories_are_walked_recursively() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        touch(&tmp.path().join("top.wav"));
        touch(&nested.join("deep.wav"));
        touch(&nested.join("skip.png"));

        let files = collect_files(&[tmp.path().to_path_buf()], &["wav"]);
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "wav"));
    }

    #[test]
    fn extensionless_file_is_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let bare = tmp.path().join("README");
        touch(&bare);

        assert!(collect_files(&[bare], &["txt"]).is_empty());
    }
}
