pub use crate::args::{self, ArgSpec};
pub use crate::globals::Settings;
pub use crate::{arg, arg_long};
