use std::fs::File;
use std::io::Write;

use anyhow::Result;

use crate::models::ProductRecord;

/// Writes the records as a JSON array indented by two spaces.
pub fn write_records<W: Write>(records: &[ProductRecord], mut writer: W) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn save_to_file(records: &[ProductRecord], filename: &str) -> Result<()> {
    write_records(records, File::create(filename)?)
}

pub fn dump_html(html: &str, filename: &str) -> Result<()> {
    std::fs::write(filename, html)?;
    Ok(())
}
