use std::fmt;

use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};

/// RFC3339 timestamps in UTC for text and JSON output.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcRfc3339;

impl FormatTime for UtcRfc3339 {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        match OffsetDateTime::now_utc().format(&Rfc3339) {
            Ok(ts) => write!(w, "{ts} "),
            Err(_) => write!(w, "<invalid-time> "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_rfc3339_with_trailing_space() {
        let mut buf = String::new();
        UtcRfc3339
            .format_time(&mut Writer::new(&mut buf))
            .unwrap();

        assert!(buf.ends_with(' '));
        let ts = buf.trim_end();
        assert_eq!(ts.as_bytes()[4], b'-');
        assert_eq!(ts.as_bytes()[10], b'T');
        assert!(ts.ends_with('Z'), "expected UTC timestamp, got {ts}");
    }
}
