use std::path::Path;

/// Format family a caption file is parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptionFormat {
    /// Timestamped lyrics, `[MM:SS.xx]text`
    Lrc,
    /// SubRip cues: index, time range, text lines
    Srt,
    /// Advanced SubStation Alpha / SubStation Alpha scripts
    Ass,
    /// Plain text; WebVTT is routed here as well
    PlainText,
}

/// One entry of the supported extension table.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionInfo {
    /// Lower-case extension including the leading dot
    pub extension: &'static str,
    pub format: CaptionFormat,
    pub description: &'static str,
}

pub const SUPPORTED_EXTENSIONS: &[ExtensionInfo] = &[
    ExtensionInfo { extension: ".lrc", format: CaptionFormat::Lrc, description: "LRC lyrics file" },
    ExtensionInfo { extension: ".txt", format: CaptionFormat::PlainText, description: "Plain text file" },
    ExtensionInfo { extension: ".srt", format: CaptionFormat::Srt, description: "SRT subtitle file" },
    ExtensionInfo { extension: ".ass", format: CaptionFormat::Ass, description: "ASS subtitle file" },
    ExtensionInfo { extension: ".ssa", format: CaptionFormat::Ass, description: "SSA subtitle file" },
    ExtensionInfo { extension: ".vtt", format: CaptionFormat::PlainText, description: "WebVTT subtitle file" },
];

/// Lower-cased extension of `path` with a leading dot, e.g. `.srt`.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}

/// Look up the table entry for `path`, if its extension is supported.
pub fn lookup(path: &Path) -> Option<&'static ExtensionInfo> {
    let extension = extension_of(path)?;
    SUPPORTED_EXTENSIONS.iter().find(|info| info.extension == extension)
}

/// Human-readable description for a table extension such as `.ass`.
pub fn describe(extension: &str) -> &'static str {
    SUPPORTED_EXTENSIONS
        .iter()
        .find(|info| info.extension == extension)
        .map(|info| info.description)
        .unwrap_or("Unknown file type")
}

/// Classify a file by extension. Anything outside the table is handled as plain text.
pub fn classify(path: &Path) -> CaptionFormat {
    lookup(path)
        .map(|info| info.format)
        .unwrap_or(CaptionFormat::PlainText)
}
