// crates/dropforge-ui/src/helpers/format.rs
//
// UI-layer string utilities. Anything with processing semantics belongs in
// dropforge-core — this module is purely about rendering labels.

/// "1 file" / "7 files" for status lines.
pub fn file_count(n: usize) -> String {
    if n == 1 {
        "1 file".into()
    } else {
        format!("{n} files")
    }
}

/// Radio label for the video tab's frame-sampling interval.
pub fn nth_frame_label(n: u32) -> String {
    match n {
        1 => "Every frame".into(),
        2 => "Every 2nd frame".into(),
        3 => "Every 3rd frame".into(),
        n => format!("Every {n}th frame"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_count_singular_and_plural() {
        assert_eq!(file_count(1), "1 file");
        assert_eq!(file_count(2), "2 files");
        assert_eq!(file_count(0), "0 files");
    }

    #[test]
    fn frame_labels_use_english_ordinals() {
        assert_eq!(nth_frame_label(1), "Every frame");
        assert_eq!(nth_frame_label(2), "Every 2nd frame");
        assert_eq!(nth_frame_label(3), "Every 3rd frame");
        assert_eq!(nth_frame_label(4), "Every 4th frame");
        assert_eq!(nth_frame_label(5), "Every 5th frame");
    }
}
