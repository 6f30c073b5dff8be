//! Misc utility stuff

use flate2::read::MultiGzDecoder;
use fs_err as fs;
use std::error;
use std::fmt;
use std::io::{self, BufRead, Read, Write};
use std::ops::{Deref, DerefMut};
use std::path::Path;

/// Shorthand for returning an error Result
#[macro_export]
macro_rules! err {
    ($e:literal) => {Err($crate::util::Error::Error($e.to_string()))};
    ($e:expr) => {Err($crate::util::Error::Error($e))};
    ($($e:expr),+) => {Err($crate::util::Error::Error(format!($($e),+)))}
}
pub use err;

// Shorthand for implementing a pass-through error
macro_rules! err_type {
    ($x:path, $i:path) => {
        impl From<$x> for Error {
            fn from(kind: $x) -> Error {
                $i(kind)
            }
        }
    };
}

/// Various errors
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Custom csort error
    Error(String),
    /// A row had a different number of columns than the first row of its source
    ColumnCount {
        /// columns in the offending row
        found: usize,
        /// columns in the first row
        expected: usize,
    },
    /// pass through ParseIntError
    ParseIntError(std::num::ParseIntError),
    /// pass through io::Error
    IoError(io::Error),
    /// be an error, but don't report anything
    Silent,
}
/// Result type for csort
pub type Result<T> = core::result::Result<T, Error>;
impl error::Error for Error {}

impl Error {
    /// return true if this error should be treated as not an error
    pub fn suppress(&self) -> bool {
        match self {
            Error::IoError(err) => err.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
    /// return true if this error should be treated as an error, but silently
    pub const fn silent(&self) -> bool {
        matches!(self, Error::Silent)
    }
}

err_type!(io::Error, Error::IoError);
err_type!(std::num::ParseIntError, Error::ParseIntError);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Error(s) => write!(f, "{}", s)?,
            Error::ColumnCount { found, expected } => {
                write!(f, "Row has {} columns, but must have {}", found, expected)?
            }
            Error::ParseIntError(s) => write!(f, "ParseIntError : {}", s)?,
            Error::IoError(s) => write!(f, "IoError : {}", s)?,
            Error::Silent => write!(f, "Silent")?,
        }
        Ok(())
    }
}

/// Input file. Wrapped in a type so I can 'impl Debug'
pub struct Infile(
    /// The file being read
    pub io::BufReader<Box<dyn Read>>,
);

impl Infile {
    /// create a new input file
    pub fn new(f: io::BufReader<Box<dyn Read>>) -> Self {
        Self(f)
    }
}

impl Default for Infile {
    fn default() -> Self {
        Self::new(io::BufReader::new(Box::new(io::empty())))
    }
}

impl fmt::Debug for Infile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Infile")
    }
}

impl Deref for Infile {
    type Target = io::BufReader<Box<dyn Read>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Infile {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// output file type
pub type Outfile = io::BufWriter<Box<dyn Write>>;

/// Make an Outfile from a file name.
/// "-" is standard output, anything else is created or truncated.
pub fn get_writer<P: AsRef<Path>>(name: P) -> Result<Outfile> {
    let name = name.as_ref();
    let inner: Box<dyn Write> = {
        if name == Path::new("-") {
            Box::new(io::stdout())
        } else {
            Box::new(fs::File::create(name)?)
        }
    };
    Ok(io::BufWriter::new(inner))
}

/// Make an Infile from a file name.
/// "-" is standard input. Gzipped data is decompressed.
pub fn get_reader<P: AsRef<Path>>(name: P) -> Result<Infile> {
    let name = name.as_ref();
    let inner: Box<dyn Read> = {
        if name == Path::new("-") {
            Box::new(io::stdin())
        } else {
            Box::new(fs::File::open(name)?)
        }
    };
    wrap_reader(inner)
}

/// Buffer an arbitrary reader, decompressing if it starts with the gzip magic number
pub fn wrap_reader(inner: Box<dyn Read>) -> Result<Infile> {
    let mut outer = io::BufReader::new(inner);
    let start = outer.fill_buf()?;
    if start.starts_with(&[0x1fu8, 0x8bu8, 0x08u8]) {
        outer = io::BufReader::new(Box::new(MultiGzDecoder::new(outer)));
    }
    Ok(Infile::new(outer))
}

/// Remove one trailing newline, then one trailing carriage return
pub fn chomp(mut x: &[u8]) -> &[u8] {
    if let Some(rest) = x.strip_suffix(b"\n") {
        x = rest;
    }
    if let Some(rest) = x.strip_suffix(b"\r") {
        x = rest;
    }
    x
}
