//! global settings and command line arguments available to all tools

use crate::args::ArgValue;
use crate::prelude::*;
use csort::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// environment variable holding the log filter, if --log is not given
pub const LOG_ENV: &str = "CSORT_LOG";

const A: [ArgSpec; 1] = [arg_long! {"log", "Filter", "Log filter for diagnostics on stderr, e.g. 'debug'"}];

pub fn global_args() -> &'static [ArgSpec] {
    &A
}

#[derive(Clone, Debug, Default)]
pub struct Settings {
    /// --log, overriding CSORT_LOG
    pub log: Option<String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn consume(&mut self, args: &[ArgValue]) -> Result<()> {
        for x in args {
            if x.name == "log" {
                self.log = Some(x.value.clone());
            } else {
                unreachable!();
            }
        }
        self.init_logging()
    }
    /// Send tracing output to stderr. Only the first call in a process has any effect.
    pub fn init_logging(&self) -> Result<()> {
        let filter = match &self.log {
            Some(spec) => match EnvFilter::try_new(spec) {
                Ok(f) => f,
                Err(e) => return err!("Invalid log filter '{}' : {}", spec, e),
            },
            None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        };
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
        Ok(())
    }
}
