//! The prelude

#[doc(inline)]
pub use crate::collect::Source;
#[doc(inline)]
pub use crate::output::Destination;
#[doc(inline)]
pub use crate::sort::SortConfig;
#[doc(inline)]
pub use crate::table::{Row, Table};
#[doc(inline)]
pub use crate::util::{err, get_reader, get_writer, Error, Result};

#[doc(inline)]
pub use std::io::{BufRead, Read, Write};
