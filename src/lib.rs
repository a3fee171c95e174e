//! captionfix - format-aware text substitution for caption and lyric files
//!
//! Timestamps, cue indices and dialogue headers are preserved while the
//! human-readable text of each line goes through a replacement table.

pub mod cli;
pub mod config;
pub mod emptiness;
pub mod error;
pub mod format;
pub mod parse;
pub mod replacements;
pub mod rewrite;
pub mod stats;
pub mod subtitle;
pub mod substitute;
pub mod workflow;
