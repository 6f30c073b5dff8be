use crate::globals;
use clap::ArgAction;
use csort::prelude::*;

#[macro_export]
macro_rules! arg {
    ($a:expr,$b:expr,$c:expr,$d:expr) => {
        $crate::args::ArgSpec { name: $a, short: Some($b), value: $c, help: $d }
    };
}

#[macro_export]
macro_rules! arg_long {
    ($a:expr,$c:expr,$d:expr) => {
        $crate::args::ArgSpec { name: $a, short: None, value: $c, help: $d }
    };
}

#[derive(Debug)]
pub struct ProgSpec {
    pub help: &'static str,
    pub version: &'static str,
}

/// return current version string
pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

impl ProgSpec {
    pub const fn new(help: &'static str) -> Self {
        Self { help, version: version() }
    }
}

/// One command line option. An empty `value` makes it a flag.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub short: Option<char>,
    pub value: &'static str,
    pub help: &'static str,
}

#[derive(Debug)]
pub struct ArgValue {
    pub name: String,
    pub value: String,
}

impl ArgValue {
    pub fn new(name: &str, value: &str) -> Self {
        Self { name: name.to_string(), value: value.to_string() }
    }
}

pub fn add_arg(a: clap::Command, x: &ArgSpec, hide_help: bool) -> clap::Command {
    let mut b = clap::Arg::new(x.name).long(x.name).help(x.help);
    if let Some(c) = x.short {
        b = b.short(c);
    }
    if x.value.is_empty() {
        b = b.action(ArgAction::SetTrue);
    } else {
        b = b.value_name(x.value).action(ArgAction::Set);
    }
    b = b.hide_long_help(hide_help);
    a.arg(b)
}

pub fn get_arg(m: &clap::ArgMatches, x: &ArgSpec, v: &mut Vec<ArgValue>) {
    if x.value.is_empty() {
        if m.get_flag(x.name) {
            v.push(ArgValue::new(x.name, ""));
        }
    } else if let Some(val) = m.get_one::<String>(x.name) {
        v.push(ArgValue::new(x.name, val));
    }
}

/// Parse `argv` against `spec` plus the global args.
/// Global args are applied to `glob`, the rest are returned in `spec` order.
/// `-h` belongs to the tools, so help is `--help` only.
pub fn parse(
    prog: &ProgSpec,
    spec: &[ArgSpec],
    argv: &[String],
    glob: &mut globals::Settings,
) -> Result<Vec<ArgValue>> {
    let mut a = clap::Command::new("csort")
        .bin_name(argv.first().cloned().unwrap_or_else(|| "csort".to_string()))
        .version(prog.version)
        .about(prog.help)
        .args_override_self(true)
        .disable_help_flag(true)
        .arg(clap::Arg::new("help").long("help").help("Print help").action(ArgAction::Help));

    for x in spec {
        a = add_arg(a, x, false);
    }
    for x in globals::global_args() {
        a = add_arg(a, x, true);
    }
    let m = a.get_matches_from(argv);
    let mut v: Vec<ArgValue> = Vec::new();
    for x in globals::global_args() {
        get_arg(&m, x, &mut v);
    }
    glob.consume(&v)?;
    v.clear();
    for x in spec {
        get_arg(&m, x, &mut v);
    }
    Ok(v)
}

/// parse a sort column number
pub fn to_column(value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) => Ok(n),
        Err(_) => err!("Sort column must be a non-negative integer : '{}'", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [ArgSpec; 3] = [
        arg! {"input", 'i', "File", "input"},
        arg! {"header", 'h', "", "header"},
        arg! {"reverse", 'r', "", "reverse"},
    ];

    fn argv(x: &[&str]) -> Vec<String> {
        x.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flags_and_values() -> Result<()> {
        let mut glob = globals::Settings::new();
        let v = parse(&ProgSpec::new("test"), &A, &argv(&["t", "-h", "-i", "x.csv"]), &mut glob)?;
        let names: Vec<&str> = v.iter().map(|x| x.name.as_str()).collect();
        assert_eq!(names, ["input", "header"]);
        assert_eq!(v[0].value, "x.csv");
        Ok(())
    }

    #[test]
    fn last_value_wins() -> Result<()> {
        let mut glob = globals::Settings::new();
        let v = parse(&ProgSpec::new("test"), &A, &argv(&["t", "-i", "a", "-i", "b"]), &mut glob)?;
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].value, "b");
        Ok(())
    }

    #[test]
    fn columns() {
        assert_eq!(to_column("0").unwrap(), 0);
        assert_eq!(to_column("12").unwrap(), 12);
        assert!(to_column("-1").is_err());
        assert!(to_column("x").is_err());
    }
}
