//! keypath CLI - look up values in nested documents

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::fs;
use std::io;
use std::path::PathBuf;

use keypath::demo::{self, display_value};
use keypath::{resolve, resolve_safe, FixSuggestion, PathError};

#[derive(Parser)]
#[command(name = "keypath")]
#[command(about = "Resolve values in nested JSON/YAML documents by slash-delimited key paths")]
#[command(version)]
struct Cli {
    /// Log lookups at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the built-in examples and their results
    Demo,

    /// Run the built-in self-check scenarios
    Check {
        /// Print passed checks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a key path in a document
    Get {
        /// Key path, e.g. config/database/host
        key_path: String,

        /// Document to read (stdin if omitted)
        file: Option<PathBuf>,

        /// Document format
        #[arg(short, long, value_enum, default_value_t = DocFormat::Json)]
        format: DocFormat,

        /// Print null instead of failing when the path is missing
        #[arg(long)]
        safe: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DocFormat {
    Json,
    Yaml,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Demo => {
            run_demo();
            Ok(())
        }
        Commands::Check { json } => run_check(json),
        Commands::Get {
            key_path,
            file,
            format,
            safe,
        } => run_get(&key_path, file, format, safe),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();
}

fn run_demo() {
    let rule = "=".repeat(50);
    println!("{}", rule);
    println!("{}", "KEY PATH DEMONSTRATION".cyan().bold());
    println!("{}", rule);

    for example in demo::examples() {
        println!("\n{}:", example.title);
        println!("Object: {}", example.object);
        println!("Key path: {}", example.key_path);
        match resolve(&example.object, example.key_path) {
            Ok(Some(value)) => println!("Result: {}", display_value(value)),
            Ok(None) => println!("Result: None"),
            Err(e) => println!("{} {}", "Error:".red(), e),
        }
    }
}

fn run_check(json: bool) -> Result<(), PathError> {
    if !json {
        println!("Running key path self-checks...");
    }

    let outcomes = demo::run_checks()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    for outcome in &outcomes {
        println!(
            "{} Test {} passed: {}",
            "✓".green(),
            outcome.case,
            outcome.description
        );
    }
    println!("\n{}", "All checks passed!".green().bold());

    Ok(())
}

fn run_get(
    key_path: &str,
    file: Option<PathBuf>,
    format: DocFormat,
    safe: bool,
) -> Result<(), PathError> {
    let text = match file {
        Some(path) => fs::read_to_string(path)?,
        None => io::read_to_string(io::stdin())?,
    };

    match format {
        DocFormat::Json => {
            let doc: serde_json::Value = serde_json::from_str(&text)?;
            let found = if safe {
                resolve_safe(&doc, key_path)
            } else {
                resolve(&doc, key_path)?
            };
            let out = found.unwrap_or(&serde_json::Value::Null);
            println!("{}", serde_json::to_string_pretty(out)?);
        }
        DocFormat::Yaml => {
            let doc: serde_yaml::Value = serde_yaml::from_str(&text)?;
            let found = if safe {
                resolve_safe(&doc, key_path)
            } else {
                resolve(&doc, key_path)?
            };
            let out = found.unwrap_or(&serde_yaml::Value::Null);
            print!("{}", serde_yaml::to_string(out)?);
        }
    }

    Ok(())
}
