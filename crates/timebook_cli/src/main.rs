//! TimeBook command-line tools.
//!
//! # Responsibility
//! - Smoke-check `timebook_core` linkage.
//! - Generate seeded sample data files and inspect existing ones.

mod generator;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use generator::{GeneratorConfig, TestDataGenerator};
use std::path::{Path, PathBuf};
use timebook_core::{JsonTimeBookStorage, StorageError, UserPrefs, PREFS_FILE};

/// TimeBook data tools
#[derive(Parser)]
#[command(name = "timebook")]
#[command(version)]
struct Cli {
    /// Preferences file locating the default timebook data file
    #[arg(long, global = true, default_value = PREFS_FILE)]
    prefs: PathBuf,

    /// Write logs into this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print core linkage info
    Ping,
    /// Generate a seeded sample timebook file
    Generate(GenerateArgs),
    /// Load a timebook file and print its counts
    Inspect(InspectArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Output file
    #[arg(long, default_value = "data/timebook-generated.json")]
    output: PathBuf,

    /// Number of persons to create
    #[arg(long, default_value_t = GeneratorConfig::default().people)]
    people: usize,

    /// Largest number of members drawn per group
    #[arg(long, default_value_t = GeneratorConfig::default().max_per_group)]
    max_per_group: usize,

    /// RNG seed
    #[arg(long, default_value_t = GeneratorConfig::default().seed)]
    seed: u64,
}

#[derive(Args)]
struct InspectArgs {
    /// Timebook file (defaults to the path in the preferences file)
    path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let prefs = UserPrefs::load(&cli.prefs)?;
    if let Some(log_dir) = &cli.log_dir {
        start_logging(&prefs.log_level, log_dir)?;
    }

    match cli.command {
        Command::Ping => {
            println!("timebook_core ping={}", timebook_core::ping());
            println!("timebook_core version={}", timebook_core::core_version());
            Ok(())
        }
        Command::Generate(args) => generate(args),
        Command::Inspect(args) => inspect(args.path.unwrap_or(prefs.time_book_file_path)),
    }
}

fn start_logging(level: &str, log_dir: &Path) -> Result<()> {
    let absolute = if log_dir.is_absolute() {
        log_dir.to_path_buf()
    } else {
        std::env::current_dir()
            .context("failed to resolve current directory")?
            .join(log_dir)
    };
    let log_dir = absolute
        .to_str()
        .context("log directory must be valid UTF-8")?;
    timebook_core::init_logging(level, log_dir).map_err(anyhow::Error::msg)
}

fn generate(args: GenerateArgs) -> Result<()> {
    let config = GeneratorConfig {
        people: args.people,
        max_per_group: args.max_per_group,
        seed: args.seed,
    };
    let (book, summary) = TestDataGenerator::new(config).generate()?;
    JsonTimeBookStorage::new(&args.output)
        .save(&book)
        .with_context(|| format!("failed to save {}", args.output.display()))?;

    log::info!(
        "event=generate module=cli status=ok seed={} persons={} groups={} mappings={}",
        config.seed,
        summary.persons,
        summary.groups,
        summary.mappings
    );
    println!(
        "{} people, {} groups and {} person-group mappings generated.",
        summary.persons, summary.groups, summary.mappings
    );
    println!("Data saved to {}.", args.output.display());
    Ok(())
}

fn inspect(path: PathBuf) -> Result<()> {
    let storage = JsonTimeBookStorage::new(&path);
    let book = match storage.read() {
        Ok(book) => book,
        Err(StorageError::FileMissing(path)) => {
            anyhow::bail!("no timebook file at {}", path.display())
        }
        Err(err) => return Err(err).context(format!("cannot load {}", path.display())),
    };

    println!("file={}", path.display());
    println!("persons={}", book.persons().len());
    println!("groups={}", book.groups().len());
    println!("mappings={}", book.mappings().len());
    println!("next_person_id={}", book.persons().watermark());
    println!("next_group_id={}", book.groups().watermark());
    Ok(())
}
