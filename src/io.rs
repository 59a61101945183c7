use std::io::Write;

use crate::error::{Error, Result};
use crate::record::OutputRecord;

/// Write the records as a 2-space indented JSON array followed by a newline.
pub fn write_records<W: Write>(records: &[OutputRecord], mut writer: W) -> Result<()> {
    let rendered = render_records(records)?;
    writer
        .write_all(rendered.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(Error::Output)?;
    Ok(())
}

/// Render the full document in memory so nothing is emitted on failure.
pub fn render_records(records: &[OutputRecord]) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(records)?;
    rendered.push('\n');
    Ok(rendered)
}
