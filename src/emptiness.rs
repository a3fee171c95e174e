/// What happens to a line after substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    /// Drop the whole line, structural prefix included, and count it
    DropCounted,
}

/// Judge a substituted payload. Whitespace-only counts as empty.
pub fn judge(substituted: &str) -> Verdict {
    if substituted.trim().is_empty() {
        Verdict::DropCounted
    } else {
        Verdict::Keep
    }
}
