use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use rokuon_i18n::{I18nError, loader};
use serde_json::json;

use crate::error::{CliError, Result};
use crate::util::{write_json, write_line};

#[derive(Debug, Clone, Args)]
pub struct FmtArgs {
    /// Resource file to rewrite in canonical form.
    pub file: PathBuf,

    /// Only report whether the file is canonical; exit code 1 when not.
    #[arg(long)]
    pub check: bool,
}

pub fn run_fmt(args: &FmtArgs, json: bool, out: &mut dyn Write) -> Result<()> {
    let original =
        fs::read_to_string(&args.file).map_err(|source| I18nError::io(&args.file, source))?;
    let resource = loader::load_resource_str(&args.file.display().to_string(), &original)?;
    let formatted = resource.serialize();
    let canonical = formatted == original;

    let status = match (canonical, args.check) {
        (true, _) => "unchanged",
        (false, true) => "needs-format",
        (false, false) => {
            loader::write_resource_file(&args.file, &resource)?;
            tracing::info!(path = %args.file.display(), messages = resource.len(), "resource reformatted");
            "formatted"
        }
    };

    if json {
        write_json(
            out,
            &json!({
                "file": args.file.display().to_string(),
                "status": status,
                "messages": resource.len(),
            }),
        )?;
    } else {
        write_line(out, &format!("{status}: {}", args.file.display()))?;
    }

    if status == "needs-format" {
        return Err(CliError::exit(
            1,
            format!("not canonically formatted: {}", args.file.display()),
        ));
    }
    Ok(())
}
