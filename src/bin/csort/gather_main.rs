use crate::prelude::*;
use crate::sort_main::SortOpts;
use csort::prelude::*;
use std::io;

pub fn main(argv: &[String], settings: &mut Settings) -> Result<()> {
    let prog = args::ProgSpec::new(
        "Read a file, stdin, or every .csv file under a directory, then sort the lines by one column.",
    );
    const A: [ArgSpec; 6] = [
        arg! {"input", 'i', "File", "Use a file with the name file-name as an input."},
        arg! {"output", 'o', "File", "Use a file with the name file-name as an output."},
        arg! {"field", 'f', "N", "Sort input lines by value number N."},
        arg! {"header", 'h', "", "The first line is a header that must be ignored during sorting but included in the output."},
        arg! {"reverse", 'r', "", "Sort input lines in reverse order."},
        arg! {"dir", 'd', "Dir", "Specify a directory where the application must read input files from."},
    ];
    let args = args::parse(&prog, &A, argv, settings)?;
    let opts = SortOpts::new(&args)?;

    let Some(source) = Source::new(&opts.input, &opts.dir) else {
        println!("You can use only one of these flags: -i/-d");
        return Ok(());
    };
    let mut out = io::stdout().lock();
    let content = source.gather(opts.header, &mut out)?;
    // headers were rendered into the text, so they are sorted along with the data
    let content = opts.config.sort_text(&content)?;
    Destination::new(&opts.output).emit(&content, &mut out)?;
    Ok(())
}
