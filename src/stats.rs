use std::collections::BTreeMap;
use tracing::info;

use crate::format;
use crate::rewrite::Rewrite;
use crate::substitute::{self, Occurrences};

/// File counters for one extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtensionStats {
    pub seen: usize,
    pub modified: usize,
    pub errored: usize,
}

/// Aggregate for one run, folded by the walker after every file.
#[derive(Debug, Clone, Default)]
pub struct RunStatistics {
    pub extensions: BTreeMap<String, ExtensionStats>,
    pub occurrences: Occurrences,
    pub dropped_lines: usize,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a successfully processed file into the totals.
    pub fn record_file(&mut self, extension: &str, rewrite: Rewrite) {
        let entry = self.extensions.entry(extension.to_string()).or_default();
        entry.seen += 1;
        if rewrite.result.modified {
            entry.modified += 1;
        }
        substitute::merge_occurrences(&mut self.occurrences, rewrite.occurrences);
        self.dropped_lines += rewrite.dropped_lines;
    }

    pub fn record_error(&mut self, extension: &str) {
        let entry = self.extensions.entry(extension.to_string()).or_default();
        entry.seen += 1;
        entry.errored += 1;
    }

    pub fn total_files(&self) -> usize {
        self.extensions.values().map(|s| s.seen).sum()
    }

    pub fn modified_files(&self) -> usize {
        self.extensions.values().map(|s| s.modified).sum()
    }

    pub fn errored_files(&self) -> usize {
        self.extensions.values().map(|s| s.errored).sum()
    }

    /// Rule totals, highest count first; ties ordered by search text.
    pub fn sorted_occurrences(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<(&str, usize)> = self
            .occurrences
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(old, count)| (old.as_str(), *count))
            .collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        sorted
    }

    /// Log the end-of-run report.
    pub fn report(&self) {
        info!("File type statistics:");
        for (extension, stats) in &self.extensions {
            info!(
                "  {} ({}): {} files",
                extension,
                format::describe(extension),
                stats.seen
            );
        }

        let sorted = self.sorted_occurrences();
        if !sorted.is_empty() {
            info!("Replacement statistics:");
            for (old, count) in sorted {
                info!("  '{}' replaced {} times", old, count);
            }
        }

        if self.dropped_lines > 0 {
            info!("Removed {} empty lines", self.dropped_lines);
        }

        info!(
            "Done! Total: {} files, modified: {} files, errors: {} files",
            self.total_files(),
            self.modified_files(),
            self.errored_files()
        );
    }
}
