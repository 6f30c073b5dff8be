use crate::*;
use std::fmt;

#[derive(Copy, Clone)]
pub struct OneMain {
    pub name: &'static str,
    pub help: &'static str,
    pub proc: fn(&[String], &mut Settings) -> Result<()>,
}

impl fmt::Debug for OneMain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OneMain {} : {}", self.name, self.help)
    }
}

macro_rules! proc {
    ($a:expr,$b:expr,$c:expr) => {
        OneMain {
            name: $a,
            help: $b,
            proc: $c,
        }
    };
}

pub const MAINLIST: &[OneMain] = &[
    proc! {"sort", "Sort one file or stdin by a column.", sort_main::main},
    proc! {"gather", "Sort a file, stdin, or a directory of .csv files by a column.", gather_main::main},
];

/// tool used when the first argument is an option rather than a tool name
pub const DEFAULT_TOOL: &str = "sort";
