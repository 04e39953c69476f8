#![forbid(unsafe_code)]

pub mod check;
pub mod cli;
pub mod context;
pub mod error;
pub mod fmt;
pub mod get;
pub mod list;
pub mod util;

pub use cli::{Cli, Commands, run};
pub use error::{CliError, Result};
