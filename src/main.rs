//! lexlib - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::debug;

use lexlib::util::config::{env_config_path, load_config, render_config};
use lexlib::util::logger;
use lexlib::{LexemeLibrary, LexemeType, LibraryConfig, VERSION};

/// Inspect the lexeme table used to classify expression symbols
#[derive(Parser, Debug)]
#[command(name = "lexlib")]
#[command(version = VERSION)]
#[command(about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Config file (RON); falls back to $LEXLIB_CONFIG
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify symbols
    Classify {
        /// Symbols to classify
        #[arg(value_name = "SYMBOL", required = true)]
        symbols: Vec<String>,

        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List registered symbols
    List {
        /// Only list symbols of this type (e.g. operation, function)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<LexemeType>,
    },

    /// Print the canonical form of symbols
    Canonicalize {
        /// Symbols to canonicalize
        #[arg(value_name = "SYMBOL", required = true)]
        symbols: Vec<String>,
    },

    /// Print the highest operator priority
    MaxPriority,

    /// Print the effective configuration
    Config,
}

/// One row of `classify` output
#[derive(Debug, Serialize)]
struct Classification {
    symbol: String,
    #[serde(rename = "type")]
    kind: LexemeType,
    priority: Option<i32>,
    canonical: String,
    tags: BTreeSet<String>,
}

fn classify(
    library: &LexemeLibrary,
    symbol: &str,
) -> Classification {
    Classification {
        symbol: symbol.to_string(),
        kind: library.get_type(symbol),
        priority: library.get_priority(symbol),
        canonical: library.canonicalize(symbol),
        tags: library.tags(symbol),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        logger::init_debug();
    } else {
        logger::init();
    }

    let config = match args.config.clone().or_else(env_config_path) {
        Some(path) => load_config(&path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => LibraryConfig::default(),
    };
    debug!("Using config: {:?}", config);

    let library = LexemeLibrary::from_config(&config);

    match args.command {
        Commands::Classify { symbols, json } => {
            let rows: Vec<_> = symbols.iter().map(|s| classify(&library, s)).collect();
            if json {
                let out =
                    serde_json::to_string_pretty(&rows).context("Failed to serialize output")?;
                println!("{}", out);
            } else {
                for row in rows {
                    let priority = row
                        .priority
                        .map(|p| p.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    let tags: Vec<_> = row.tags.into_iter().collect();
                    println!(
                        "{}\t{}\t{}\t{}\t{}",
                        row.symbol,
                        row.kind,
                        priority,
                        row.canonical,
                        tags.join(",")
                    );
                }
            }
        }
        Commands::List { kind } => {
            let symbols = match kind {
                Some(kind) => library.get_lexemes_of(kind),
                None => library.get_lexemes(),
            };
            for symbol in symbols {
                println!("{}", symbol);
            }
        }
        Commands::Canonicalize { symbols } => {
            for symbol in symbols {
                println!("{}", library.canonicalize(&symbol));
            }
        }
        Commands::MaxPriority => {
            println!("{}", library.max_priority());
        }
        Commands::Config => {
            let text = render_config(&config).context("Failed to render config")?;
            println!("{}", text);
        }
    }

    Ok(())
}
