use std::io::Write;

use clap::Args;
use rokuon_i18n::ResolveError;
use serde_json::json;

use crate::context::Context;
use crate::error::Result;
use crate::util::{write_json, write_line};

#[derive(Debug, Clone, Args)]
pub struct KeysArgs {
    /// Locale whose keys to list; the default locale when omitted.
    #[arg(long, short)]
    pub locale: Option<String>,
}

pub fn run_keys(context: &Context, args: &KeysArgs, out: &mut dyn Write) -> Result<()> {
    let locale = context.locale_or_default(args.locale.as_deref());
    let catalog = context
        .catalog
        .locale(locale)
        .ok_or_else(|| ResolveError::UnknownLocale {
            locale: locale.to_string(),
        })?;
    let keys = catalog.sorted_keys();

    if context.json {
        return write_json(out, &json!({ "locale": locale, "keys": keys }));
    }
    for key in keys {
        write_line(out, key)?;
    }
    Ok(())
}

pub fn run_locales(context: &Context, out: &mut dyn Write) -> Result<()> {
    let default = context.catalog.default_locale();
    let locales = context.catalog.locales();

    if context.json {
        let entries: Vec<_> = locales
            .iter()
            .map(|locale| {
                json!({
                    "locale": locale,
                    "messages": context.catalog.locale(locale.as_str()).map_or(0, |c| c.len()),
                    "default": *locale == default,
                })
            })
            .collect();
        return write_json(out, &entries);
    }
    for locale in locales {
        let marker = if locale == default { " (default)" } else { "" };
        write_line(out, &format!("{locale}{marker}"))?;
    }
    Ok(())
}
