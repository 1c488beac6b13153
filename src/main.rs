/// funclist: regex-driven function lists from the command line
///
/// Commands:
/// - list: Render the function list of a file (text, JSON or NDJSON)
/// - locate: Resolve a listed symbol to source lines, cycling through occurrences
/// - config: Print or write the default configuration
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_appender::non_blocking;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use funclist::cli::{OutputFormat, OutputWriter};
use funclist::config::CONFIG_FILE;
use funclist::{
    FuncListConfig, FuncListError, FunctionList, ListUri, OccurrenceLocator, SortMode,
    SourceDocument,
};

#[derive(Parser)]
#[command(name = "funclist")]
#[command(about = "Regex-driven function lists with occurrence navigation", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./funclist.toml, then built-in defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the function list of a source file
    List {
        /// Path to source file
        file: PathBuf,

        /// Sort mode (defaults to the configured one)
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,

        /// Blank line between entries
        #[arg(short, long)]
        double_spacing: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: FormatArg,
    },

    /// Find the source lines of a listed symbol
    Locate {
        /// Path to source file
        file: PathBuf,

        /// Zero-based entry index in the list
        entry: usize,

        /// Sort mode the entry index refers to
        #[arg(short, long, value_enum, default_value = "appear")]
        sort: SortArg,

        /// Number of consecutive lookups
        #[arg(short, long, default_value_t = 1)]
        repeat: usize,
    },

    /// Print the default configuration
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    /// Order of appearance
    Appear,
    /// Case-insensitive
    Nocase,
    /// Case-sensitive
    Case,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Appear => SortMode::Appearance,
            SortArg::Nocase => SortMode::CaseInsensitive,
            SortArg::Case => SortMode::CaseSensitive,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// List document text
    Text,
    /// Standard JSON array (pretty-printed)
    Json,
    /// Newline-delimited JSON (streaming)
    Ndjson,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("funclist=warn"))
        .context("Failed to build log filter")?;

    // stdout carries command output, logs go to stderr
    let (non_blocking_stderr, _stderr_guard) = non_blocking(std::io::stderr());
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking_stderr)
                .with_target(false)
                .with_ansi(true),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            file,
            sort,
            double_spacing,
            format,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let mode = sort.map(SortMode::from).unwrap_or(config.sort_list);
            let double_spacing = double_spacing || config.double_spacing;
            list_file(&config, &file, mode, double_spacing, format)?;
        }
        Commands::Locate {
            file,
            entry,
            sort,
            repeat,
        } => {
            let config = load_config(cli.config.as_deref())?;
            locate_entry(&config, &file, entry, sort.into(), repeat)?;
        }
        Commands::Config { output } => {
            let toml = FuncListConfig::default().to_toml()?;
            match output {
                Some(path) => {
                    fs::write(&path, toml)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Wrote default configuration to {}", path.display());
                }
                None => print!("{}", toml),
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<FuncListConfig> {
    let config = match path {
        Some(path) => FuncListConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FuncListConfig::load_or_default(Path::new(CONFIG_FILE))?,
    };
    debug!("{} filter groups configured", config.filters.len());
    Ok(config)
}

/// Build the list for `file`, or `None` when no filter group covers it
fn build_list(
    config: &FuncListConfig,
    file: &Path,
    mode: SortMode,
    double_spacing: bool,
) -> Result<Option<FunctionList>> {
    let filters = match config.filters_for(file) {
        Ok(filters) => filters,
        Err(FuncListError::NoFilterForExtension(path)) => {
            eprintln!("No function list filter configured for {}", path);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let source = SourceDocument::new(file.display().to_string());
    let list = FunctionList::build(
        ListUri::new(source, 0, 0, 0),
        &text,
        filters,
        mode,
        double_spacing,
    )?;
    Ok(Some(list))
}

fn list_file(
    config: &FuncListConfig,
    file: &Path,
    mode: SortMode,
    double_spacing: bool,
    format: FormatArg,
) -> Result<()> {
    let Some(list) = build_list(config, file, mode, double_spacing)? else {
        return Ok(());
    };

    let format = match format {
        FormatArg::Text => OutputFormat::Text,
        FormatArg::Json => OutputFormat::Json,
        FormatArg::Ndjson => OutputFormat::Ndjson,
    };

    let mut writer = OutputWriter::new(format);
    writer.write_list(list.rendered())?;
    writer.flush()?;

    Ok(())
}

fn locate_entry(
    config: &FuncListConfig,
    file: &Path,
    entry_index: usize,
    mode: SortMode,
    repeat: usize,
) -> Result<()> {
    let Some(list) = build_list(config, file, mode, false)? else {
        return Ok(());
    };

    let entry = list.aggregate().get_index(entry_index).with_context(|| {
        format!(
            "Entry {} out of range, the list has {} entries",
            entry_index,
            list.aggregate().len()
        )
    })?;
    let native_filter = list
        .native_filter(entry)
        .context("Entry has no native filter")?;

    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let source = file.display().to_string();

    let mut locator = OccurrenceLocator::new();
    for _ in 0..repeat {
        match locator.locate(&entry.native_text, &source, &text, native_filter) {
            Some(line) => println!("{}:{}", source, line + 1),
            None => {
                println!("{}: no occurrence of '{}'", source, entry.native_text);
                break;
            }
        }
    }

    Ok(())
}
