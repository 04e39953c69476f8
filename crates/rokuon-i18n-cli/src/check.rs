use std::io::Write;

use clap::Args;
use rokuon_i18n::{CompletenessReport, LocaleCompleteness};

use crate::context::Context;
use crate::error::{CliError, Result};
use crate::util::{write_json, write_line};

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Locale every other locale is compared against; the default locale
    /// when omitted.
    #[arg(long)]
    pub reference: Option<String>,
}

/// Compare locales against the reference; fails with exit code 1 when any
/// locale is incomplete.
pub fn run_check(context: &Context, args: &CheckArgs, out: &mut dyn Write) -> Result<()> {
    let reference = context.locale_or_default(args.reference.as_deref());
    let report = context.catalog.check_completeness(reference)?;

    if context.json {
        write_json(out, &report)?;
    } else {
        write_report(&report, out)?;
    }

    let incomplete = report.incomplete().count();
    if incomplete == 0 {
        tracing::info!(reference = %report.reference, "all locales complete");
        Ok(())
    } else {
        Err(CliError::exit(
            1,
            format!(
                "{incomplete} locale(s) out of step with '{}'",
                report.reference
            ),
        ))
    }
}

fn write_report(report: &CompletenessReport, out: &mut dyn Write) -> Result<()> {
    write_line(out, &format!("reference: {}", report.reference))?;
    if report.locales.is_empty() {
        return write_line(out, "no other locales loaded");
    }
    for locale in &report.locales {
        write_locale(locale, out)?;
    }
    Ok(())
}

fn write_locale(locale: &LocaleCompleteness, out: &mut dyn Write) -> Result<()> {
    if locale.is_complete() {
        return write_line(out, &format!("{}: ok", locale.locale));
    }
    write_line(out, &format!("{}: incomplete", locale.locale))?;
    for key in &locale.missing {
        write_line(out, &format!("  missing: {key}"))?;
    }
    for key in &locale.extra {
        write_line(out, &format!("  extra: {key}"))?;
    }
    for mismatch in &locale.mismatched_placeholders {
        write_line(
            out,
            &format!(
                "  placeholders: {} expected [{}] found [{}]",
                mismatch.key,
                mismatch.expected.join(", "),
                mismatch.found.join(", ")
            ),
        )?;
    }
    Ok(())
}
