use crate::models::{Layout, RawRow};
use anyhow::Result;
use csv::{ReaderBuilder, Trim};
use log::warn;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Load observation rows from a CSV file with a
/// `category,value[,highlighted][,identity]` header.
///
/// Unparseable records are logged and skipped rather than failing the whole
/// load, in keeping with the engine's best-effort data policy.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RawRow>> {
    let rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (idx, record) in rdr.into_deserialize::<RawRow>().enumerate() {
        match record {
            Ok(row) => rows.push(row),
            Err(e) => warn!("row {}: skipping unreadable record: {}", idx + 2, e),
        }
    }
    Ok(rows)
}

/// Save a computed layout as pretty JSON.
pub fn save_layout_json<P: AsRef<Path>>(layout: &Layout, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(layout)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
