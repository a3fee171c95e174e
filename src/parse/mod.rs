// Per-format line grammars
//
// Each format family splits raw lines into structural fragments that are
// emitted verbatim and payload text that is eligible for substitution:
// - Lrc: `[MM:SS.xx]` timestamp prefix + lyric
// - Srt: cue index and time range lines are structural, the rest is payload
// - Ass: `Dialogue:` header fields as prefix, free text as payload
// - Plain: the whole line is payload (also used for WebVTT)

pub mod ass;
pub mod lrc;
pub mod plain;
pub mod srt;

pub use ass::AssParser;
pub use lrc::LrcParser;
pub use plain::PlainParser;
pub use srt::SrtParser;

use crate::format::CaptionFormat;

/// Classification of one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// Emitted verbatim, never substituted
    Structural(&'a str),
    /// `prefix` is kept verbatim, `text` is substitution-eligible
    Payload { prefix: &'a str, text: &'a str },
    /// Originally empty or whitespace-only; always dropped, never counted
    Blank,
}

/// Line grammar for one format family.
pub trait CaptionParser {
    /// Classify a single line with its line terminator already removed.
    fn parse_line<'a>(&self, line: &'a str) -> ParsedLine<'a>;

    /// Classify every line of a file in order.
    fn parse<'a>(&self, lines: &[&'a str]) -> Vec<ParsedLine<'a>> {
        lines.iter().map(|&line| self.parse_line(line)).collect()
    }
}

/// Factory for the parser matching a format
pub struct ParserFactory;

impl ParserFactory {
    pub fn for_format(format: CaptionFormat) -> Box<dyn CaptionParser> {
        match format {
            CaptionFormat::Lrc => Box::new(LrcParser),
            CaptionFormat::Srt => Box::new(SrtParser),
            CaptionFormat::Ass => Box::new(AssParser),
            CaptionFormat::PlainText => Box::new(PlainParser),
        }
    }
}
