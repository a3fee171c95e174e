use once_cell::sync::Lazy;
use regex::Regex;

use super::{CaptionParser, ParsedLine};

/// `[MM:SS]` or `[MM:SS.xx]` / `[MM:SS:xx]` at the start of the line,
/// two digits per field.
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\[\d{2}:\d{2}(?:[.:]\d{2})?\])(.*)$").expect("valid LRC timestamp pattern")
});

/// LRC lyrics. Only timestamped lines are substituted; tag lines such as
/// `[ar:Artist]` pass through untouched.
pub struct LrcParser;

impl CaptionParser for LrcParser {
    fn parse_line<'a>(&self, line: &'a str) -> ParsedLine<'a> {
        let line = line.trim();
        if line.is_empty() {
            return ParsedLine::Blank;
        }

        match TIMESTAMP_REGEX.captures(line) {
            Some(caps) => {
                let (Some(timestamp), Some(lyric)) = (caps.get(1), caps.get(2)) else {
                    return ParsedLine::Structural(line);
                };
                ParsedLine::Payload {
                    prefix: timestamp.as_str(),
                    text: lyric.as_str().trim(),
                }
            }
            None => ParsedLine::Structural(line),
        }
    }
}
