use std::io::Write;

use clap::Args;
use rokuon_i18n::ArgValue;
use serde_json::json;

use crate::context::Context;
use crate::error::Result;
use crate::util::{parse_key_value, write_json, write_line};

#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Message key, e.g. `recording_time`.
    pub key: String,

    /// Locale to resolve in; the default locale when omitted.
    #[arg(long, short)]
    pub locale: Option<String>,

    /// Placeholder value; numeric text is passed as a number.
    #[arg(long = "arg", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub args: Vec<(String, String)>,

    /// Fall back through the fallback chain and finally print the key
    /// instead of failing.
    #[arg(long)]
    pub lenient: bool,
}

pub fn run_get(context: &Context, args: &GetArgs, out: &mut dyn Write) -> Result<()> {
    let locale = context.locale_or_default(args.locale.as_deref());
    let values: rokuon_i18n::Args = args
        .args
        .iter()
        .map(|(name, raw)| (name.as_str(), ArgValue::infer(raw)))
        .collect();

    let text = if args.lenient {
        context.catalog.text(locale, &args.key, &values)
    } else {
        context.catalog.resolve(locale, &args.key, &values)?
    };

    if context.json {
        write_json(
            out,
            &json!({
                "locale": locale,
                "key": args.key,
                "text": text,
            }),
        )
    } else {
        write_line(out, &text)
    }
}
