use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::{error, info};
use walkdir::WalkDir;

use crate::error::{CaptionError, Result};
use crate::format;

/// A cue header (index line followed by a time range line) together with
/// the newline and any blank lines in front of it.
static CUE_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n(?:[ \t]*\n)*(?P<header>\d+\n\d{2}:\d{2}:\d{2},\d{3} --> \d{2}:\d{2}:\d{2},\d{3})")
        .expect("valid SRT cue header pattern")
});

/// Counters for one spacing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpacingSummary {
    pub seen: usize,
    pub changed: usize,
    pub errored: usize,
}

/// Put exactly one blank line before every cue except the first and end
/// the file with one blank line. Line endings are normalized to `\n`.
///
/// Applying this twice gives the same result as applying it once.
pub fn space_srt(content: &str) -> String {
    let normalized = content.replace("\r\n", "\n");
    let body = normalized.trim_start_matches('\n').trim_end_matches('\n');
    if body.is_empty() {
        return normalized;
    }

    let mut spaced = CUE_HEADER_REGEX
        .replace_all(body, "\n\n${header}")
        .into_owned();
    spaced.push_str("\n\n");
    spaced
}

/// Space one SRT file in place. Returns whether the file was rewritten.
pub fn format_srt_file<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(CaptionError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let spaced = space_srt(&content);
    if spaced == content {
        return Ok(false);
    }

    std::fs::write(path, spaced)?;
    Ok(true)
}

/// Space every `.srt` file under `root`, continuing past failures.
pub fn format_directory<P: AsRef<Path>>(root: P) -> Result<SpacingSummary> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(CaptionError::Config(format!(
            "Input path is not a directory: {}",
            root.display()
        )));
    }

    let mut summary = SpacingSummary::default();
    for entry in WalkDir::new(root).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file()
            || format::extension_of(entry.path()).as_deref() != Some(".srt")
        {
            continue;
        }

        summary.seen += 1;
        match format_srt_file(entry.path()) {
            Ok(true) => {
                summary.changed += 1;
                info!("Formatted: {}", entry.path().display());
            }
            Ok(false) => {}
            Err(e) => {
                summary.errored += 1;
                error!("Failed to format {}: {}", entry.path().display(), e);
            }
        }
    }

    info!(
        "SRT spacing complete: {} files, {} changed, {} errors",
        summary.seen, summary.changed, summary.errored
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    const PACKED: &str = "1\n00:00:01,000 --> 00:00:02,000\nhello\n2\n00:00:03,000 --> 00:00:04,000\nworld\n";
    const SPACED: &str = "1\n00:00:01,000 --> 00:00:02,000\nhello\n\n2\n00:00:03,000 --> 00:00:04,000\nworld\n\n";

    #[test]
    fn test_inserts_blank_line_before_each_cue() {
        assert_eq!(space_srt(PACKED), SPACED);
    }

    #[test]
    fn test_is_idempotent() {
        assert_eq!(space_srt(SPACED), SPACED);
        assert_eq!(space_srt(&space_srt(PACKED)), SPACED);
    }

    #[test]
    fn test_collapses_extra_blank_lines() {
        let messy = "\n1\r\n00:00:01,000 --> 00:00:02,000\r\nhello\r\n\r\n  \r\n\r\n2\r\n00:00:03,000 --> 00:00:04,000\r\nworld";
        assert_eq!(space_srt(messy), SPACED);
    }

    #[test]
    fn test_numeric_text_is_not_a_cue_index() {
        let input = "1\n00:00:01,000 --> 00:00:02,000\n2024\n";
        assert_eq!(space_srt(input), "1\n00:00:01,000 --> 00:00:02,000\n2024\n\n");
    }

    #[test]
    fn test_empty_content_is_left_alone() {
        assert_eq!(space_srt(""), "");
        assert_eq!(space_srt("\n"), "\n");
    }

    #[test]
    fn test_format_directory() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.srt").write_str(PACKED).unwrap();
        temp.child("sub/b.SRT").write_str(SPACED).unwrap();
        temp.child("c.lrc").write_str(PACKED).unwrap();

        let summary = format_directory(temp.path()).unwrap();
        assert_eq!(summary, SpacingSummary { seen: 2, changed: 1, errored: 0 });
        temp.child("a.srt").assert(SPACED);
        temp.child("c.lrc").assert(PACKED);

        let again = format_directory(temp.path()).unwrap();
        assert_eq!(again.changed, 0);
    }
}
