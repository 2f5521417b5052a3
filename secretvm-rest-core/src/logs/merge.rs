use crate::logs::LogLine;

/// Merge per-source sequences into one sequence ordered by timestamp.
///
/// The sort is stable: equal timestamps put system lines before container
/// lines, then keep the order the sequences were supplied in, then each
/// line's original position.
pub fn merge(sequences: Vec<Vec<LogLine>>) -> Vec<LogLine> {
    let mut merged: Vec<LogLine> = sequences.into_iter().flatten().collect();
    merged.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| a.source.cmp(&b.source))
    });
    merged
}
