//! syncfile CLI - run Rhai scripts with synchronous file bindings
//!
//! Usage:
//!   syncfile run <script.rhai>     Run a script
//!   syncfile eval <expr>           Evaluate an inline expression
//!   syncfile read <path>           Read a file the way readTextFile does
//!   syncfile exists <path>         Check a path the way existsSync does
//!   syncfile config                Show the effective configuration

use anyhow::Result;
use clap::{Parser, Subcommand};
use rhai::Dynamic;
use std::path::PathBuf;
use syncfile::helpers::{self, binary};
use syncfile::{SyncFileConfig, SyncFileEngine, config, logging, output};

#[derive(Parser)]
#[command(name = "syncfile")]
#[command(about = "Run Rhai scripts with synchronous file access")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a TOML config file
    #[arg(short, long, global = true, env = config::CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a script file
    Run {
        /// Path to the .rhai script
        script: PathBuf,
    },

    /// Evaluate an inline expression
    Eval {
        /// Rhai source text
        expr: String,
    },

    /// Read a file through the same path as readTextFile/readBinaryFile
    Read {
        path: String,

        /// Report the byte length instead of printing text
        #[arg(short, long)]
        binary: bool,
    },

    /// Check whether a path exists
    Exists { path: String },

    /// Show the effective configuration
    Config,
}

fn main() {
    let cli = Cli::parse();
    logging::set_up_logging(cli.verbose);

    if let Err(e) = run(cli) {
        output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let file_config = SyncFileConfig::discover(cli.config.as_deref())?;
    let options = file_config.binding_options();

    match cli.command {
        Commands::Run { script } => {
            output::action(&format!("Running {}", script.display()));
            let engine = SyncFileEngine::with_options(options);
            print_result(engine.run_file(&script)?);
            output::success("Done");
        }

        Commands::Eval { expr } => {
            let engine = SyncFileEngine::with_options(options);
            print_result(engine.eval(&expr)?);
        }

        Commands::Read { path, binary: as_binary } => {
            if as_binary {
                let limit = binary::effective_limit(0, options.max_binary_len);
                let blob = helpers::read_binary_file(&path, limit)?;
                println!("{} bytes", blob.len());
            } else {
                let text = helpers::read_text_file(&path, options.text_encoding)?;
                print!("{}", text);
            }
        }

        Commands::Exists { path } => {
            println!("{}", helpers::exists_sync(&path));
        }

        Commands::Config => {
            match cli.config.clone().or_else(config::default_config_path) {
                Some(path) if path.is_file() => output::detail(&format!("file = {}", path.display())),
                Some(path) => output::warning(&format!("{} not found, using defaults", path.display())),
                None => output::warning("no config directory, using defaults"),
            }
            print!("{}", toml::to_string(&options)?);
        }
    }

    Ok(())
}

fn print_result(value: Dynamic) {
    if !value.is_unit() {
        println!("{}", value);
    }
}
