//! Find the input and turn it into text or tables

use crate::err;
use crate::table::Table;
use crate::util::{get_reader, Result};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// files in a directory tree with this suffix are read
pub const CSV_SUFFIX: &str = ".csv";

/// Where the rows come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// standard input
    Stdin,
    /// one named file
    File(PathBuf),
    /// every `.csv` file under a directory
    Dir(PathBuf),
}

impl Source {
    /// new from the input file and directory options, empty meaning not given
    /// Returns None if both were given.
    pub fn new(input: &str, dir: &str) -> Option<Self> {
        match (input.is_empty(), dir.is_empty()) {
            (false, false) => None,
            (true, false) => Some(Self::Dir(dir.into())),
            (false, true) => Some(Self::File(input.into())),
            (true, true) => Some(Self::Stdin),
        }
    }
    /// Read a single file, or stdin, as one table
    pub fn table(&self, has_header: bool) -> Result<Table> {
        match self {
            Self::Stdin => read_table("-", has_header),
            Self::File(name) => read_table(name, has_header),
            Self::Dir(dir) => err!("'{}' is a directory of tables, not a table", dir.display()),
        }
    }
    /// Read each file of the source into a table, and concatenate the rendered tables.
    /// Directory walk errors are written to `report` and end the walk early.
    pub fn gather(&self, has_header: bool, report: &mut impl Write) -> Result<Vec<u8>> {
        match self {
            Self::Dir(dir) => walk_csv(dir, has_header, report),
            _ => Ok(self.table(has_header)?.render()),
        }
    }
}

/// Open a file, "-" for stdin, and read it as one table
pub fn read_table<P: AsRef<Path>>(name: P, has_header: bool) -> Result<Table> {
    let name = name.as_ref();
    let mut file = get_reader(name)?;
    let table = Table::read(&mut *file, has_header)?;
    tracing::debug!(file = %name.display(), rows = table.len(), "read table");
    Ok(table)
}

/// Recursively find the `.csv` files under `dir`, in file name order,
/// read each as its own table and concatenate the results.
pub fn walk_csv(dir: &Path, has_header: bool, report: &mut impl Write) -> Result<Vec<u8>> {
    tracing::debug!(dir = %dir.display(), "walking");
    let paths = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) if e.file_type().is_dir() => None,
            Ok(e) => Some(Ok(e.into_path())),
            Err(e) => Some(Err(e)),
        });
    concat_csv(paths, has_header, report)
}

/// Read the `.csv` files among `paths` as tables and concatenate them.
/// The first `Err` is written to `report` and ends the list; content read before it is kept.
pub fn concat_csv<I, E>(paths: I, has_header: bool, report: &mut impl Write) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = core::result::Result<PathBuf, E>>,
    E: fmt::Display,
{
    let mut content = Vec::new();
    for path in paths {
        let path = match path {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("directory walk stopped : {}", e);
                writeln!(report, "{}", e)?;
                break;
            }
        };
        if path.to_string_lossy().ends_with(CSV_SUFFIX) {
            content.extend_from_slice(&read_table(&path, has_header)?.render());
        }
    }
    Ok(content)
}
