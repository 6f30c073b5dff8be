use crate::args::ArgValue;
use crate::prelude::*;
use csort::prelude::*;
use std::io;

/// options shared by the sorting tools
#[derive(Debug, Default)]
pub struct SortOpts {
    pub input: String,
    pub output: String,
    pub dir: String,
    pub header: bool,
    pub config: SortConfig,
}

impl SortOpts {
    pub fn new(args: &[ArgValue]) -> Result<Self> {
        let mut opts = Self::default();
        for x in args {
            if x.name == "input" {
                opts.input = x.value.clone();
            } else if x.name == "output" {
                opts.output = x.value.clone();
            } else if x.name == "dir" {
                opts.dir = x.value.clone();
            } else if x.name == "field" {
                opts.config.column = args::to_column(&x.value)?;
            } else if x.name == "header" {
                opts.header = true;
            } else if x.name == "reverse" {
                opts.config.reverse = true;
            } else {
                unreachable!();
            }
        }
        Ok(opts)
    }
}

pub fn main(argv: &[String], settings: &mut Settings) -> Result<()> {
    let prog = args::ProgSpec::new("Sort the lines of a comma delimited file by one column.");
    const A: [ArgSpec; 5] = [
        arg! {"input", 'i', "File", "Use a file with the name file-name as an input."},
        arg! {"output", 'o', "File", "Use a file with the name file-name as an output."},
        arg! {"field", 'f', "N", "Sort input lines by value number N."},
        arg! {"header", 'h', "", "The first line is a header that must be ignored during sorting but included in the output."},
        arg! {"reverse", 'r', "", "Sort input lines in reverse order."},
    ];
    let args = args::parse(&prog, &A, argv, settings)?;
    let opts = SortOpts::new(&args)?;

    let source = Source::new(&opts.input, "").unwrap_or(Source::Stdin);
    let mut table = source.table(opts.header)?;
    opts.config.sort(&mut table)?;
    Destination::new(&opts.output).emit(&table.render(), &mut io::stdout().lock())?;
    Ok(())
}
