// crates/dropforge-core/src/state.rs
// Tab settings and app state — plain data, serializable via serde.
// Persisted through eframe storage; dropforge-media receives copies of the
// per-tab settings structs at drop time.

use serde::{Deserialize, Serialize};

// ── Tabs ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabKind {
    Audio,
    Image,
    Text,
    Video,
}

impl TabKind {
    pub const ALL: &'static [TabKind] =
        &[TabKind::Audio, TabKind::Image, TabKind::Text, TabKind::Video];

    pub fn title(self) -> &'static str {
        match self {
            TabKind::Audio => "Audio",
            TabKind::Image => "Images",
            TabKind::Text  => "Text",
            TabKind::Video => "Video",
        }
    }

    /// Singular noun for error dialogs ("No valid audio files were found").
    pub fn noun(self) -> &'static str {
        match self {
            TabKind::Audio => "audio",
            TabKind::Image => "image",
            TabKind::Text  => "text",
            TabKind::Video => "video",
        }
    }

    /// Extensions accepted by this tab's drop zone (lowercase, no dot).
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            TabKind::Audio => &["mp3", "wav", "flac", "m4a", "aac", "ogg", "wma"],
            TabKind::Image => &["jpg", "jpeg", "png", "bmp"],
            TabKind::Text  => &["txt"],
            TabKind::Video => &["mp4", "avi", "mov", "mkv"],
        }
    }

    pub fn drop_hint(self) -> &'static str {
        match self {
            TabKind::Audio => "Drop your audio files here",
            TabKind::Image => "Drop your image files here",
            TabKind::Text  => "Drop your text files here",
            TabKind::Video => "Drop your video files here",
        }
    }
}

// ── Audio ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioFormat {
    Mp3,
    Wav,
    Flac,
    M4a,
    Aac,
    Ogg,
    Wma,
}

impl AudioFormat {
    pub const ALL: &'static [AudioFormat] = &[
        AudioFormat::Mp3,
        AudioFormat::Wav,
        AudioFormat::Flac,
        AudioFormat::M4a,
        AudioFormat::Aac,
        AudioFormat::Ogg,
        AudioFormat::Wma,
    ];

    /// Output file extension (lowercase, no dot). ffmpeg picks the encoder
    /// from this when it names the output file.
    pub fn extension(self) -> &'static str {
        match self {
            AudioFormat::Mp3  => "mp3",
            AudioFormat::Wav  => "wav",
            AudioFormat::Flac => "flac",
            AudioFormat::M4a  => "m4a",
            AudioFormat::Aac  => "aac",
            AudioFormat::Ogg  => "ogg",
            AudioFormat::Wma  => "wma",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AudioFormat::Mp3  => "MP3",
            AudioFormat::Wav  => "WAV",
            AudioFormat::Flac => "FLAC",
            AudioFormat::M4a  => "M4A",
            AudioFormat::Aac  => "AAC",
            AudioFormat::Ogg  => "OGG",
            AudioFormat::Wma  => "WMA",
        }
    }
}

/// Selectable MP3 bitrates, in kbps.
pub const MP3_BITRATES: &[u32] = &[96, 128, 192, 320];

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioSettings {
    pub format:       AudioFormat,
    pub bitrate_kbps: u32,
    pub mono:         bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            format:       AudioFormat::Mp3,
            bitrate_kbps: 128,
            mono:         false,
        }
    }
}

// ── Images ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageResolution {
    Square1024,
    Square768,
    Square512,
}

impl ImageResolution {
    pub const ALL: &'static [ImageResolution] = &[
        ImageResolution::Square1024,
        ImageResolution::Square768,
        ImageResolution::Square512,
    ];

    /// Side length in pixels — outputs are always square.
    pub fn side(self) -> u32 {
        match self {
            ImageResolution::Square1024 => 1024,
            ImageResolution::Square768  => 768,
            ImageResolution::Square512  => 512,
        }
    }

    /// "1024x1024" — also used as part of the output filename suffix.
    pub fn label(self) -> &'static str {
        match self {
            ImageResolution::Square1024 => "1024x1024",
            ImageResolution::Square768  => "768x768",
            ImageResolution::Square512  => "512x512",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSettings {
    pub resolution: ImageResolution,
    pub add_margin: bool,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            resolution: ImageResolution::Square1024,
            add_margin: false,
        }
    }
}

// ── Text ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextMode {
    Copy,
    Merge,
    Dedupe,
}

impl TextMode {
    pub const ALL: &'static [TextMode] =
        &[TextMode::Copy, TextMode::Merge, TextMode::Dedupe];

    pub fn label(self) -> &'static str {
        match self {
            TextMode::Copy   => "Copy Files",
            TextMode::Merge  => "Merge Files",
            TextMode::Dedupe => "Deduplicate Words",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TextMode::Copy   => "Each file is copied into its sibling output/ directory.",
            TextMode::Merge  => "All dropped files are joined into one, with a --- separator between them.",
            TextMode::Dedupe => "Duplicate words are removed; the first occurrence wins.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextSettings {
    pub mode: TextMode,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self { mode: TextMode::Copy }
    }
}

// ── Video ────────────────────────────────────────────────────────────────────

/// Selectable frame-sampling intervals ("every Nth frame").
pub const FRAME_INTERVALS: &[u32] = &[1, 2, 3, 4, 5];

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoSettings {
    pub frame_interval: u32,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self { frame_interval: 1 }
    }
}

// ── App state ────────────────────────────────────────────────────────────────

/// Everything that survives a restart: the active tab and the per-tab
/// settings. Runtime-only state (busy counter, status line) lives in the
/// UI's AppContext instead.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppState {
    pub active_tab: TabKind,
    pub audio:      AudioSettings,
    pub image:      ImageSettings,
    pub text:       TextSettings,
    pub video:      VideoSettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_tab: TabKind::Audio,
            audio:      AudioSettings::default(),
            image:      ImageSettings::default(),
            text:       TextSettings::default(),
            video:      VideoSettings::default(),
        }
    }
}
