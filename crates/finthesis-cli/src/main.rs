mod commands;
mod input;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use finthesis_core::{AppConfig, CategoryGroupKind};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "finthesis")]
#[command(about = "Summarize fintech news and structure it into an investment thesis")]
struct Cli {
    #[command(flatten)]
    overrides: ConfigOverrides,

    #[command(subcommand)]
    command: Commands,
}

/// Flags that take precedence over `FINTHESIS_*` environment settings.
#[derive(Debug, Default, Args)]
struct ConfigOverrides {
    /// YAML category table to rank against instead of the built-in one
    #[arg(long, global = true)]
    categories: Option<PathBuf>,

    /// Maximum sentences in an extractive summary
    #[arg(long, global = true)]
    max_sentences: Option<usize>,

    /// Word-overlap ratio above which sentences count as duplicates (0 to 1)
    #[arg(long, global = true)]
    overlap_threshold: Option<f64>,

    /// Sentences with fewer words are ignored
    #[arg(long, global = true)]
    min_words: Option<usize>,

    /// Labels kept per category group
    #[arg(long, global = true)]
    top_n: Option<usize>,
}

impl ConfigOverrides {
    /// Layer the flags over `config`, checking them like their env counterparts.
    fn apply(&self, mut config: AppConfig) -> anyhow::Result<AppConfig> {
        if let Some(path) = &self.categories {
            config.categories_path = Some(path.clone());
        }
        if let Some(n) = self.max_sentences {
            config.max_sentences = n;
        }
        if let Some(t) = self.overlap_threshold {
            config.overlap_threshold = finthesis_core::validate_overlap_threshold(t)
                .map_err(|reason| anyhow::anyhow!("invalid --overlap-threshold: {reason}"))?;
        }
        if let Some(n) = self.min_words {
            config.min_sentence_words = n;
        }
        if let Some(n) = self.top_n {
            config.top_n = n;
        }
        Ok(config)
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the extractive summary of a documents file
    Summarize {
        /// JSON array of `{ "text", "metadata" }` objects, or `-` for stdin
        #[arg(long)]
        docs: PathBuf,

        /// Strip ads, bylines, and other boilerplate before summarizing
        #[arg(long)]
        clean: bool,
    },
    /// Structure summary text into a thesis and print it as JSON
    Structure {
        /// Summary text to structure
        #[arg(
            long,
            conflicts_with = "summary_file",
            required_unless_present = "summary_file"
        )]
        summary: Option<String>,

        /// Read the summary from a file instead
        #[arg(long)]
        summary_file: Option<PathBuf>,

        /// Documents whose sources are carried into the thesis
        #[arg(long)]
        docs: Option<PathBuf>,
    },
    /// Summarize documents and structure the result in one run
    Thesis {
        /// JSON array of `{ "text", "metadata" }` objects, or `-` for stdin
        #[arg(long)]
        docs: PathBuf,

        /// Topic recorded on the report
        #[arg(long, default_value = "fintech")]
        topic: String,

        /// Use this summary instead of extracting one locally
        #[arg(long)]
        summary_file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Strip ads, bylines, and other boilerplate before summarizing
        #[arg(long)]
        clean: bool,
    },
    /// List the active category table
    Categories {
        /// Only show one group
        #[arg(long, value_enum)]
        group: Option<GroupArg>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Markdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GroupArg {
    Themes,
    Risks,
    Signals,
}

impl From<GroupArg> for CategoryGroupKind {
    fn from(group: GroupArg) -> Self {
        match group {
            GroupArg::Themes => CategoryGroupKind::Themes,
            GroupArg::Risks => CategoryGroupKind::Risks,
            GroupArg::Signals => CategoryGroupKind::Signals,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.overrides.apply(finthesis_core::load_app_config()?)?;

    // Logs go to stderr; stdout carries command output.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Summarize { docs, clean } => commands::run_summarize(&config, &docs, clean),
        Commands::Structure {
            summary,
            summary_file,
            docs,
        } => {
            let summary = match (summary, summary_file) {
                (Some(text), _) => text,
                (None, Some(path)) => input::read_text(&path)?,
                (None, None) => anyhow::bail!("one of --summary or --summary-file is required"),
            };
            commands::run_structure(&config, &summary, docs.as_deref())
        }
        Commands::Thesis {
            docs,
            topic,
            summary_file,
            format,
            clean,
        } => commands::run_thesis(
            &config,
            &commands::ThesisArgs {
                docs: &docs,
                topic: &topic,
                summary_file: summary_file.as_deref(),
                format,
                clean,
            },
        ),
        Commands::Categories { group } => commands::run_categories(&config, group.map(Into::into)),
    }
}
