use csort::{Error, Result};
use std::env;

pub mod args;
mod cmdmain;
mod gather_main;
pub mod globals;
pub mod prelude;
mod sort_main;
use crate::globals::Settings;

fn main() {
    let mut settings = Settings::new();
    match inner_main(env::args().collect(), &mut settings) {
        Err(e) => {
            if e.suppress() {
                std::process::exit(0);
            }
            if e.silent() {
                std::process::exit(1);
            }
            eprintln!("Error\t{}", e);
            eprint!("Command\t");
            for x in env::args() {
                eprint!("{} ", x);
            }
            eprintln!();
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}

pub fn inner_main(mut args: Vec<String>, settings: &mut Settings) -> Result<()> {
    if args.is_empty() {
        args.push("csort".to_string());
    }
    if args.len() < 2 {
        args.push(cmdmain::DEFAULT_TOOL.to_string());
    }
    if args[1] == "help" || args[1] == "--help" {
        println!("USAGE : csort <command> [options...]");
        println!("Commands are :");
        for x in cmdmain::MAINLIST {
            println!("{:8} : {}", x.name, x.help);
        }
        println!("Starting with an option, or giving no arguments, means '{}'", cmdmain::DEFAULT_TOOL);
        return Ok(());
    }
    if args[1] == "version" || args[1] == "--version" {
        println!("csort version {}", args::version());
        return Ok(());
    }
    if args[1].starts_with('-') {
        args.insert(1, cmdmain::DEFAULT_TOOL.to_string());
    }
    for x in cmdmain::MAINLIST {
        if args[1] == x.name {
            let arg1 = args.remove(1);
            args[0] += " ";
            args[0] += &arg1;
            return (x.proc)(&args, settings);
        }
    }
    eprintln!("Valid subcommands are :");
    for x in cmdmain::MAINLIST {
        eprintln!("{:8} : {}", x.name, x.help);
    }
    Err(Error::Silent)
}
