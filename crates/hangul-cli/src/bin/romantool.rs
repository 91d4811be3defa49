use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use hangul_cli::commands::{config_ops, romanize_ops, sort_ops};
use korean_sort::settings::settings;
use korean_sort::trace_init::init_tracing;
use korean_sort::OutputSettings;

#[derive(Parser)]
#[command(name = "romantool", about = "Hangul romanization and sort-key tool")]
struct Cli {
    /// Settings TOML to use instead of the embedded defaults
    #[arg(long, global = true)]
    config: Option<String>,
    /// Write JSON trace logs to this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Romanize each argument
    Romanize {
        /// Text to romanize
        #[arg(required = true)]
        text: Vec<String>,
        /// Output JSON lines instead of text
        #[arg(long)]
        json: bool,
        /// Skip trimming and capitalization
        #[arg(long)]
        raw: bool,
    },
    /// Romanize a file line by line ("-" reads stdin)
    File {
        /// Input file, one text per line
        input: String,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
        /// Output JSON lines instead of text
        #[arg(long)]
        json: bool,
        /// Skip trimming and capitalization
        #[arg(long)]
        raw: bool,
    },
    /// Show how every character of a text is romanized
    Explain {
        /// Text to explain
        text: String,
        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Sort lines by romanized sort key ("-" reads stdin)
    Sort {
        /// Input file, one entry per line
        input: String,
        /// Print the sort key before each line
        #[arg(long)]
        keys: bool,
    },
    /// Add sort tags to a flat JSON object of tags
    Tags {
        /// JSON file such as {"album": "...", "title": "..."}
        json_file: String,
    },
    /// Settings helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the embedded default settings
    Default,
    /// Validate a settings file
    Check {
        /// Settings TOML file
        file: String,
    },
}

fn output_settings(raw: bool) -> OutputSettings {
    if raw {
        OutputSettings {
            trim: false,
            capitalize: false,
        }
    } else {
        settings().output.clone()
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        init_tracing(dir);
    }
    if let Some(path) = &cli.config {
        if let Err(e) = config_ops::install_custom(path) {
            eprintln!("Error loading {path}: {e}");
            process::exit(1);
        }
    }

    match cli.command {
        Command::Romanize { text, json, raw } => {
            romanize_ops::romanize_cmd(&text, &output_settings(raw), json);
        }
        Command::File {
            input,
            output,
            json,
            raw,
        } => {
            romanize_ops::file_cmd(&input, output.as_deref(), &output_settings(raw), json);
        }
        Command::Explain { text, json } => {
            romanize_ops::explain_cmd(&text, json);
        }
        Command::Sort { input, keys } => {
            sort_ops::sort_cmd(&input, keys, settings());
        }
        Command::Tags { json_file } => {
            sort_ops::tags_cmd(&json_file, settings());
        }
        Command::Config { action } => match action {
            ConfigAction::Default => config_ops::settings_export(),
            ConfigAction::Check { file } => config_ops::settings_validate(&file),
        },
    }
}
