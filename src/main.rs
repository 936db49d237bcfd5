use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use socks_diagram::app::{self, AppError, RunOptions};
use socks_diagram::config;
use socks_diagram::i18n::{self, keys, Translator};

/// Pressure-temperature operating domain ("socks") diagram.
#[derive(Parser, Debug)]
#[command(author, version)]
struct Cli {
    /// Output image, .svg for SVG, anything else PNG
    #[arg(long, default_value = "output.png")]
    output: PathBuf,

    /// Diagram config (TOML); built-in values when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective config to this path and exit
    #[arg(long)]
    write_config: Option<PathBuf>,

    /// Label language: fr, en or auto
    #[arg(long, default_value = "auto")]
    lang: String,

    /// Directory holding <lang>.toml string overrides
    #[arg(long)]
    locale_dir: Option<PathBuf>,

    /// Print min/max pressure of every curve
    #[arg(long)]
    summary: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli) -> Result<(), AppError> {
    let cfg = config::load(cli.config.as_deref())?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cli.locale_dir.as_deref());

    if let Some(path) = &cli.write_config {
        cfg.save(path)?;
        println!("{} {}", tr.t(keys::CONFIG_WRITTEN), path.display());
        return Ok(());
    }

    let opts = RunOptions {
        output: cli.output.clone(),
        summary: cli.summary,
    };
    app::run(&cfg, &tr, &opts)
}
