use crate::logs::{LogLine, LogSource};
use std::fmt::Write;

/// Journal-style timestamp without a year, microsecond precision.
pub const RENDER_TIME_FORMAT: &str = "%b %d %H:%M:%S%.6f";

/// Render lines as plain text, one per line, `\n` terminated.
///
/// System lines already carry `host ident[pid]:`; container lines get
/// `<hostname> <container>:` so both read alike. Undated lines have no
/// timestamp column.
pub fn render_lines(lines: &[LogLine], hostname: &str) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.text.len() + 48).sum());

    for line in lines {
        if !line.is_undated() {
            let _ = write!(out, "{} ", line.timestamp.format(RENDER_TIME_FORMAT));
        }
        match line.source {
            LogSource::System => out.push_str(&line.text),
            LogSource::Container => {
                let _ = write!(out, "{hostname} {}: {}", line.origin, line.text);
            }
        }
        out.push('\n');
    }

    out
}
