//! Write sorted text to the console and to a file

use crate::util::{get_writer, Result};
use chrono::{Local, NaiveDateTime};
use std::io::Write;
use std::path::PathBuf;

/// first line of console output
pub const BANNER: &str = "Sorted data:";

/// File name made from a time, e.g. 2024-March-5_7-8-9.csv
pub fn auto_name(when: &NaiveDateTime) -> String {
    when.format("%Y-%B-%-d_%-H-%-M-%-S.csv").to_string()
}

/// Where the sorted text goes, besides the console
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Destination {
    /// output file, None to name it after the current time
    pub name: Option<PathBuf>,
}

impl Destination {
    /// new from the output option, empty meaning not given
    pub fn new(name: &str) -> Self {
        Self {
            name: if name.is_empty() {
                None
            } else {
                Some(name.into())
            },
        }
    }
    /// the file to write, picking a time based name if none was given
    pub fn path(&self) -> PathBuf {
        match &self.name {
            Some(x) => x.clone(),
            None => auto_name(&Local::now().naive_local()).into(),
        }
    }
    /// Show `content` on `console` after the banner, then write it to the file.
    /// Empty content writes nothing anywhere.
    /// Returns the file written, if any.
    pub fn emit(&self, content: &[u8], console: &mut impl Write) -> Result<Option<PathBuf>> {
        if content.is_empty() {
            tracing::info!("no rows, nothing written");
            return Ok(None);
        }
        writeln!(console, "{}", BANNER)?;
        console.write_all(content)?;
        console.write_all(b"\n")?;
        console.flush()?;
        let path = self.path();
        let mut w = get_writer(&path)?;
        w.write_all(content)?;
        w.flush()?;
        tracing::info!(file = %path.display(), bytes = content.len(), "wrote output");
        Ok(Some(path))
    }
}
