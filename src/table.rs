//! Rows, tables, and building a table from comma delimited lines

use crate::util::{chomp, Error, Result};
use std::fmt;
use std::io::BufRead;

/// column delimiter
pub const DELIM: u8 = b',';

/// One line of input, broken into fields.
/// Fields are raw bytes, so any encoding sorts byte-wise.
/// An empty line is one empty field.
///```
/// let row = csort::table::Row::new(b"a,,c");
/// assert_eq!(row.len(), 3);
/// assert_eq!(row.get(1), Some(&b""[..]));
/// assert_eq!(row.to_string(), "a,,c");
///```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<Vec<u8>>,
}

impl Row {
    /// split a line, without its newline, into fields
    pub fn new(line: &[u8]) -> Self {
        Self {
            fields: line.split(|ch| *ch == DELIM).map(<[u8]>::to_vec).collect(),
        }
    }
    /// How many columns in the row
    pub fn len(&self) -> usize {
        self.fields.len()
    }
    /// should always be false, but required by clippy
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
    /// Get one column, if it exists
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.fields.get(index).map(Vec::as_slice)
    }
    /// all the columns
    pub fn fields(&self) -> &[Vec<u8>] {
        &self.fields
    }
    /// append the fields, joined by the delimiter, without a newline
    pub fn write(&self, out: &mut Vec<u8>) {
        for (i, x) in self.fields.iter().enumerate() {
            if i > 0 {
                out.push(DELIM);
            }
            out.extend_from_slice(x);
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = Vec::new();
        self.write(&mut line);
        f.write_str(&String::from_utf8_lossy(&line))
    }
}

/// Split text into lines, dropping line ends.
/// A final newline does not start another line.
pub fn lines(text: &[u8]) -> Vec<&[u8]> {
    let mut v: Vec<&[u8]> = text.split(|ch| *ch == b'\n').map(chomp).collect();
    if text.is_empty() || text.ends_with(b"\n") {
        v.pop();
    }
    v
}

/// Rows in memory, plus the header line if one was requested
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// first line, verbatim, if header handling was on
    pub header: Option<Vec<u8>>,
    /// data rows, in input order until sorted
    pub rows: Vec<Row>,
}

impl Table {
    /// new empty table
    pub fn new() -> Self {
        Self::default()
    }
    /// Read one source into a table.
    /// The first line fixes the column count, even when `has_header` keeps it aside as the header.
    /// An empty line ends the table; anything after it is ignored.
    pub fn read(mut reader: impl BufRead, has_header: bool) -> Result<Self> {
        let mut table = Self::new();
        let mut width = 0;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = chomp(&buf);
            let row = Row::new(line);
            if width == 0 {
                width = row.len();
                if has_header {
                    table.header = Some(line.to_vec());
                    continue;
                }
            }
            if line.is_empty() {
                break;
            }
            if row.len() != width {
                return Err(Error::ColumnCount {
                    found: row.len(),
                    expected: width,
                });
            }
            table.rows.push(row);
        }
        Ok(table)
    }
    /// Build rows from text with no width checking and no header.
    /// Each line becomes one row.
    pub fn from_text(text: &[u8]) -> Self {
        Self {
            header: None,
            rows: lines(text).into_iter().map(Row::new).collect(),
        }
    }
    /// number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    /// no data rows?
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    /// Header, if non-empty, then every row, each followed by a newline
    pub fn render(&self) -> Vec<u8> {
        let mut result = Vec::new();
        if let Some(header) = &self.header {
            if !header.is_empty() {
                result.extend_from_slice(header);
                result.push(b'\n');
            }
        }
        for row in &self.rows {
            row.write(&mut result);
            result.push(b'\n');
        }
        result
    }
}
