#![forbid(unsafe_code)]

use clap::Parser;
use rokuon_i18n_cli::Cli;
use rokuon_i18n_cli::util::init_logging;

fn main() {
    let cli = Cli::parse();
    let json = cli.global.json;
    init_logging(cli.global.verbose);

    let stdout = std::io::stdout();
    if let Err(error) = rokuon_i18n_cli::run(cli, &mut stdout.lock()) {
        if json {
            eprintln!(
                "{}",
                serde_json::json!({
                    "status": "error",
                    "error": error.to_string(),
                    "exit_code": error.exit_code(),
                })
            );
        } else {
            eprintln!("{error}");
        }
        std::process::exit(error.exit_code());
    }
}
