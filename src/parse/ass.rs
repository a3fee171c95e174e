use once_cell::sync::Lazy;
use regex::Regex;

use super::{CaptionParser, ParsedLine};

/// `Dialogue:` plus the nine comma-terminated header fields
/// (Layer or Marked, Start, End, Style, Name, MarginL, MarginR, MarginV,
/// Effect). Group 2 is the free Text field, which may itself contain commas.
static DIALOGUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(Dialogue:\s*(?:[^,]*,){9})(.*)$").expect("valid ASS dialogue pattern")
});

/// ASS/SSA scripts. Only the text of dialogue events is substituted;
/// headers, styles and comments pass through.
pub struct AssParser;

impl CaptionParser for AssParser {
    fn parse_line<'a>(&self, line: &'a str) -> ParsedLine<'a> {
        let line = line.trim();
        if line.is_empty() {
            return ParsedLine::Blank;
        }

        match DIALOGUE_REGEX.captures(line) {
            Some(caps) => match (caps.get(1), caps.get(2)) {
                (Some(prefix), Some(text)) => ParsedLine::Payload {
                    prefix: prefix.as_str(),
                    text: text.as_str(),
                },
                _ => ParsedLine::Structural(line),
            },
            None => ParsedLine::Structural(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialogue_split_after_ninth_field() {
        assert_eq!(
            AssParser.parse_line("Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,xxx"),
            ParsedLine::Payload {
                prefix: "Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,",
                text: "xxx",
            }
        );
    }

    #[test]
    fn test_commas_in_text_stay_in_payload() {
        assert_eq!(
            AssParser.parse_line("Dialogue: Marked=0,0:00:01.00,0:00:02.00,Main,Bob,0000,0000,0000,,Well, then, yes"),
            ParsedLine::Payload {
                prefix: "Dialogue: Marked=0,0:00:01.00,0:00:02.00,Main,Bob,0000,0000,0000,,",
                text: "Well, then, yes",
            }
        );
    }

    #[test]
    fn test_non_dialogue_lines_are_structural() {
        for line in [
            "[Script Info]",
            "Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,2,2,10,10,10,1",
            "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text",
            "Comment: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,note",
            "Dialogue: 0,0:00:01.00,0:00:02.00,Default",
        ] {
            assert_eq!(AssParser.parse_line(line), ParsedLine::Structural(line));
        }
    }

    #[test]
    fn test_empty_text_field() {
        assert_eq!(
            AssParser.parse_line("Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,"),
            ParsedLine::Payload {
                prefix: "Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,",
                text: "",
            }
        );
        assert_eq!(AssParser.parse_line("   "), ParsedLine::Blank);
    }
}
