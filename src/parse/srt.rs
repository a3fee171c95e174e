use once_cell::sync::Lazy;
use regex::Regex;

use super::{CaptionParser, ParsedLine};

/// `HH:MM:SS,mmm --> HH:MM:SS,mmm`, nothing else on the line.
static TIME_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2},\d{3} --> \d{2}:\d{2}:\d{2},\d{3}$")
        .expect("valid SRT time range pattern")
});

/// Cue index: one or more ASCII digits.
pub fn is_cue_index(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_time_range(line: &str) -> bool {
    TIME_RANGE_REGEX.is_match(line)
}

/// SubRip cues. Multi-line cue text is treated as independent payload
/// lines; blank separators are dropped and left to the spacing pass.
pub struct SrtParser;

impl CaptionParser for SrtParser {
    fn parse_line<'a>(&self, line: &'a str) -> ParsedLine<'a> {
        let line = line.trim();
        if line.is_empty() {
            ParsedLine::Blank
        } else if is_cue_index(line) || is_time_range(line) {
            ParsedLine::Structural(line)
        } else {
            ParsedLine::Payload { prefix: "", text: line }
        }
    }
}
