use std::path::Path;
use tracing::debug;

use crate::emptiness::{self, Verdict};
use crate::error::{CaptionError, Result};
use crate::format::{self, CaptionFormat};
use crate::parse::{ParsedLine, ParserFactory};
use crate::replacements::ReplacementTable;
use crate::substitute::{self, Occurrences};

/// Per-file outcome handed back to the walker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileResult {
    /// True iff a payload changed or a line was dropped as empty
    pub modified: bool,
    /// Output lines without terminators
    pub lines_written: Vec<String>,
}

/// Everything one file contributes to the run.
#[derive(Debug, Clone, Default)]
pub struct Rewrite {
    pub result: FileResult,
    pub occurrences: Occurrences,
    /// Lines dropped because substitution left them empty
    pub dropped_lines: usize,
}

/// Rewrite the content of one file in memory.
///
/// Lines are split on `\n` and `\r\n`. Structural fragments are copied
/// verbatim, payloads go through the replacement table and are dropped
/// when they end up blank.
pub fn rewrite_content(
    format: CaptionFormat,
    content: &str,
    table: &ReplacementTable,
) -> Rewrite {
    let parser = ParserFactory::for_format(format);
    let lines: Vec<&str> = content.lines().collect();

    let mut rewrite = Rewrite::default();
    for parsed in parser.parse(&lines) {
        match parsed {
            ParsedLine::Blank => {}
            ParsedLine::Structural(text) => rewrite.result.lines_written.push(text.to_string()),
            ParsedLine::Payload { prefix, text } => {
                let substitution = substitute::apply(text, table);
                substitute::merge_occurrences(&mut rewrite.occurrences, substitution.occurrences);

                match emptiness::judge(&substitution.text) {
                    Verdict::Keep => {
                        rewrite.result.modified |= substitution.changed;
                        rewrite
                            .result
                            .lines_written
                            .push(format!("{}{}", prefix, substitution.text));
                    }
                    Verdict::DropCounted => {
                        rewrite.dropped_lines += 1;
                        rewrite.result.modified = true;
                    }
                }
            }
        }
    }

    rewrite
}

/// Join output lines, terminating every line with `\n`.
pub fn render(lines: &[String]) -> String {
    let mut output = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        output.push_str(line);
        output.push('\n');
    }
    output
}

/// Read, rewrite and, if anything changed, overwrite one file.
///
/// The file is not touched unless the rewrite reports a modification.
pub fn process_file<P: AsRef<Path>>(path: P, table: &ReplacementTable) -> Result<Rewrite> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(CaptionError::FileNotFound(path.display().to_string()));
    }

    let format = format::classify(path);
    let content = std::fs::read_to_string(path)?;
    let rewrite = rewrite_content(format, &content, table);

    if rewrite.result.modified {
        std::fs::write(path, render(&rewrite.result.lines_written))?;
        debug!(
            "Rewrote {} ({} lines, {} dropped)",
            path.display(),
            rewrite.result.lines_written.len(),
            rewrite.dropped_lines
        );
    }

    Ok(rewrite)
}
