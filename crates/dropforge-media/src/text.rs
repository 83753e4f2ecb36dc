// crates/dropforge-media/src/text.rs
//
// File-level text operations. The transforms themselves are pure and live
// in dropforge_core::text — this module only does the reading, writing, and
// output naming.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use dropforge_core::text::{dedupe_words, merge_contents};

use crate::paths::{ensure_output_dir, file_stem, output_dir_for, unique_output_path};

fn text_ext(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("txt")
        .to_ascii_lowercase()
}

/// Copy one file into its sibling `output/` directory under a
/// collision-free name. Returns the user-facing status message.
pub fn copy_text_file(source: &Path) -> Result<String> {
    let out_dir = output_dir_for(source);
    ensure_output_dir(&out_dir)?;
    let dest = unique_output_path(&out_dir, &file_stem(source), "", &text_ext(source));

    let contents = fs::read_to_string(source)
        .with_context(|| format!("read {}", source.display()))?;
    fs::write(&dest, contents)
        .with_context(|| format!("write {}", dest.display()))?;

    Ok(format!("Text file saved to: {}", dest.display()))
}

/// Concatenate `sources` in input order with the merge separator between
/// them. The output is `merged.txt` in the `output/` directory next to the
/// FIRST file. Returns the user-facing status message.
pub fn merge_text_files(sources: &[PathBuf]) -> Result<String> {
    let first = sources.first().context("no files to merge")?;
    let out_dir = output_dir_for(first);
    ensure_output_dir(&out_dir)?;
    let dest = unique_output_path(&out_dir, "merged", "", "txt");

    let mut parts = Vec::with_capacity(sources.len());
    for path in sources {
        parts.push(
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?,
        );
    }
    fs::write(&dest, merge_contents(&parts))
        .with_context(|| format!("write {}", dest.display()))?;

    Ok(format!("Text files merged and saved to: {}", dest.display()))
}

/// Strip duplicate whitespace-delimited words from one file, first
/// occurrence wins. Returns the user-facing status message.
pub fn dedupe_text_file(source: &Path) -> Result<String> {
    let out_dir = output_dir_for(source);
    ensure_output_dir(&out_dir)?;
    let dest = unique_output_path(
        &out_dir,
        &file_stem(source),
        "_deduplicated",
        &text_ext(source),
    );

    let contents = fs::read_to_string(source)
        .with_context(|| format!("read {}", source.display()))?;
    fs::write(&dest, dedupe_words(&contents))
        .with_context(|| format!("write {}", dest.display()))?;

    Ok(format!("Duplicate words removed, file saved to: {}", dest.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_lands_in_output_dir_with_same_content() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("notes.txt");
        fs::write(&src, "line one\nline two\n").unwrap();

        let msg = copy_text_file(&src).unwrap();
        assert!(msg.starts_with("Text file saved to:"));

        let dest = tmp.path().join("output").join("notes.txt");
        assert_eq!(fs::read_to_string(dest).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn copy_never_overwrites_an_earlier_copy() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("notes.txt");
        fs::write(&src, "v1").unwrap();
        copy_text_file(&src).unwrap();

        fs::write(&src, "v2").unwrap();
        copy_text_file(&src).unwrap();

        let out = tmp.path().join("output");
        assert_eq!(fs::read_to_string(out.join("notes.txt")).unwrap(), "v1");
        assert_eq!(fs::read_to_string(out.join("notes_001.txt")).unwrap(), "v2");
    }

    #[test]
    fn merge_writes_next_to_first_file() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "alpha").unwrap();
        fs::write(&b, "beta").unwrap();

        merge_text_files(&[a, b]).unwrap();

        let merged = tmp.path().join("output").join("merged.txt");
        assert_eq!(fs::read_to_string(merged).unwrap(), "alpha\n---\nbeta");
    }

    #[test]
    fn merge_with_no_files_is_an_error() {
        assert!(merge_text_files(&[]).is_err());
    }

    #[test]
    fn dedupe_adds_suffix_and_strips_repeats() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("words.txt");
        fs::write(&src, "red blue red green blue").unwrap();

        dedupe_text_file(&src).unwrap();

        let dest = tmp.path().join("output").join("words_deduplicated.txt");
        assert_eq!(fs::read_to_string(dest).unwrap(), "red blue green ");
    }
}
