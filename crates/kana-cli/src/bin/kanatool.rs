use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use kana_cli::commands::{config_ops, explain_ops, romaji_ops};
use kana_cli::trace_init::init_tracing;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "kanatool", about = "Kana to romaji transliteration")]
struct Cli {
    /// Settings TOML file (defaults are used when omitted)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Write JSON trace logs to this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate kana blocks given as arguments, or stdin lines when none
    Romaji {
        /// Kana blocks to transliterate
        texts: Vec<String>,
    },

    /// Show how each kana unit changes the engine state
    Explain {
        /// Kana block to explain
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Settings file helpers
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the default settings TOML
    Export,
    /// Check a settings TOML file
    Validate {
        /// Path to the settings file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let trace = init_tracing(cli.trace_dir.as_deref());

    let options = die!(
        config_ops::load_options(cli.settings.as_deref()),
        "Error loading settings: {}"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut err = io::stderr();

    let ok = match cli.command {
        Command::Romaji { texts } => {
            let summary = if texts.is_empty() {
                romaji_ops::romaji_reader(io::stdin().lock(), &mut out, &mut err, &options)
            } else {
                romaji_ops::romaji_args(&texts, &mut out, &mut err, &options)
            };
            die!(summary, "Error: {}").failed == 0
        }
        Command::Explain { text, json } => die!(
            explain_ops::explain_cmd(&mut out, &text, json, &options),
            "Error: {}"
        ),
        Command::Settings { action } => {
            match action {
                SettingsAction::Export => {
                    die!(config_ops::settings_export(&mut out), "Error: {}")
                }
                SettingsAction::Validate { file } => {
                    die!(config_ops::settings_validate(&file, &mut out), "Error: {}")
                }
            }
            true
        }
    };

    die!(out.flush(), "Error writing output: {}");
    drop(trace);
    if !ok {
        process::exit(1);
    }
}
