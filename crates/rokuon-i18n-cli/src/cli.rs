use std::io::Write;

use clap::{Parser, Subcommand};

use crate::check::{CheckArgs, run_check};
use crate::context::{Context, GlobalArgs};
use crate::error::Result;
use crate::fmt::{FmtArgs, run_fmt};
use crate::get::{GetArgs, run_get};
use crate::list::{KeysArgs, run_keys, run_locales};

#[derive(Debug, Parser)]
#[command(
    name = "rokuon-i18n",
    about = "Resolve, check, and format Rokuon recorder message catalogs",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve one message.
    Get(GetArgs),

    /// Verify every locale carries the reference locale's keys and placeholders.
    Check(CheckArgs),

    /// Rewrite a resource file in canonical form.
    Fmt(FmtArgs),

    /// List message keys of a locale.
    Keys(KeysArgs),

    /// List loaded locales.
    Locales,
}

pub fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    if let Commands::Fmt(args) = &cli.command {
        return run_fmt(args, cli.global.json, out);
    }

    let context = Context::load(&cli.global)?;
    match &cli.command {
        Commands::Get(args) => run_get(&context, args, out),
        Commands::Check(args) => run_check(&context, args, out),
        Commands::Keys(args) => run_keys(&context, args, out),
        Commands::Locales => run_locales(&context, out),
        Commands::Fmt(args) => run_fmt(args, context.json, out),
    }
}
