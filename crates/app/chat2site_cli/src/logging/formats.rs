use flexi_logger::{DeferredNow, Record, style};
use log::Level;

/// Bare message for `info`, colored level prefix otherwise.
pub fn cli_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    let level = record.level();
    match level {
        Level::Info => write!(w, "{}", record.args()),
        _ => write!(
            w,
            "{}: {}",
            style(level).paint(level.as_str().to_lowercase()),
            record.args()
        ),
    }
}
