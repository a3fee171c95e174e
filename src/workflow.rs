use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use walkdir::WalkDir;

use crate::error::{CaptionError, Result};
use crate::format::{self, ExtensionInfo, SUPPORTED_EXTENSIONS};
use crate::replacements::ReplacementTable;
use crate::rewrite;
use crate::stats::RunStatistics;

/// Runs the replacement table over every supported file under a directory.
pub struct Workflow {
    table: ReplacementTable,
}

impl Workflow {
    pub fn new(table: ReplacementTable) -> Self {
        Self { table }
    }

    /// Recursively collect files whose extension is in the supported table.
    pub fn find_files<P: AsRef<Path>>(root: P) -> Vec<(PathBuf, &'static ExtensionInfo)> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root.as_ref()).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(info) = format::lookup(entry.path()) {
                files.push((entry.path().to_path_buf(), info));
            }
        }

        files
    }

    /// Process all supported files under `root`.
    ///
    /// A failure on one file is logged and counted; the walk continues.
    pub fn process_directory<P: AsRef<Path>>(&self, root: P) -> Result<RunStatistics> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(CaptionError::Config(format!(
                "Input path is not a directory: {}",
                root.display()
            )));
        }

        info!("Processing directory: {}", root.display());
        let extensions: Vec<&str> = SUPPORTED_EXTENSIONS.iter().map(|i| i.extension).collect();
        info!("Supported file formats: {}", extensions.join(", "));

        let files = Self::find_files(root);
        info!("Found {} files to process", files.len());

        let mut stats = RunStatistics::new();
        for (path, info) in files {
            match rewrite::process_file(&path, &self.table) {
                Ok(outcome) => {
                    if outcome.result.modified {
                        info!("Processed: {}", path.display());
                    }
                    stats.record_file(info.extension, outcome);
                }
                Err(e) => {
                    error!("Failed to process {}: {}", path.display(), e);
                    stats.record_error(info.extension);
                }
            }
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn workflow() -> Workflow {
        Workflow::new(ReplacementTable::from_pairs([("xxx", "yyy"), ("drop me", "")]))
    }

    #[test]
    fn test_process_directory_walks_recursively() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.srt")
            .write_str("1\n00:00:01,000 --> 00:00:02,000\nxxx\n")
            .unwrap();
        temp.child("nested/deeper/b.LRC")
            .write_str("[00:01.00]xxx xxx\n[00:02.00]drop me\n")
            .unwrap();
        temp.child("nested/c.txt").write_str("nothing to do\n").unwrap();
        temp.child("ignored.md").write_str("xxx\n").unwrap();

        let stats = workflow().process_directory(temp.path()).unwrap();

        assert_eq!(stats.total_files(), 3);
        assert_eq!(stats.modified_files(), 2);
        assert_eq!(stats.errored_files(), 0);
        assert_eq!(stats.occurrences.get("xxx"), Some(&3));
        assert_eq!(stats.occurrences.get("drop me"), Some(&1));
        assert_eq!(stats.dropped_lines, 1);

        temp.child("a.srt").assert("1\n00:00:01,000 --> 00:00:02,000\nyyy\n");
        temp.child("nested/deeper/b.LRC").assert("[00:01.00]yyy yyy\n");
        temp.child("nested/c.txt").assert("nothing to do\n");
        temp.child("ignored.md").assert("xxx\n");
    }

    #[test]
    fn test_bad_file_is_counted_and_walk_continues() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("broken.ass").write_binary(&[0xc3, 0x28, b'\n']).unwrap();
        temp.child("fine.vtt").write_str("WEBVTT\n\nxxx\n").unwrap();

        let stats = workflow().process_directory(temp.path()).unwrap();

        assert_eq!(stats.total_files(), 2);
        assert_eq!(stats.errored_files(), 1);
        assert_eq!(stats.extensions[".ass"].errored, 1);
        assert_eq!(stats.modified_files(), 1);
        assert_eq!(
            std::fs::read(temp.child("broken.ass").path()).unwrap(),
            vec![0xc3, 0x28, b'\n']
        );
        temp.child("fine.vtt").assert("WEBVTT\nyyy\n");
    }

    #[test]
    fn test_find_files_filters_by_extension() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("one.Srt").touch().unwrap();
        temp.child("two.ssa").touch().unwrap();
        temp.child("three.doc").touch().unwrap();
        temp.child("dir.lrc/inner.txt").write_str("").unwrap();

        let found: Vec<&str> = Workflow::find_files(temp.path())
            .into_iter()
            .map(|(_, info)| info.extension)
            .collect();
        assert_eq!(found, vec![".txt", ".srt", ".ssa"]);
    }

    #[test]
    fn test_root_must_be_a_directory() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("file.srt");
        file.touch().unwrap();
        assert!(matches!(
            workflow().process_directory(file.path()),
            Err(CaptionError::Config(_))
        ));
    }
}
