use super::{CaptionParser, ParsedLine};

/// Plain text and WebVTT: the whole line is payload. Only the line
/// terminator is stripped so interior and leading spacing survive.
pub struct PlainParser;

impl CaptionParser for PlainParser {
    fn parse_line<'a>(&self, line: &'a str) -> ParsedLine<'a> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            ParsedLine::Blank
        } else {
            ParsedLine::Payload { prefix: "", text: line }
        }
    }
}
