//! CLI definition and command handling

pub mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};

use tagnotes_core::config::{load_config, load_config_or_default};
use tagnotes_core::Config;
use tagnotes_git::{CommitSource, GitRepo};
use tagnotes_github::{gate, GitHubClient, PublishOutcome};
use tagnotes_notes::{
    HtmlTitleResolver, NoteAssembler, NotesGenerator, ParserRegistry, TitleResult,
};

/// tagnotes - Generate release notes from the commits between two tags
#[derive(Debug, Parser)]
#[command(name = "tagnotes")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Without --no-dry-run the release note is only printed.")]
pub struct Cli {
    /// Tag the release note starts after
    #[arg(value_name = "FROM_TAG")]
    pub from: String,

    /// Tag being released
    #[arg(value_name = "TO_TAG")]
    pub to: String,

    /// Create the release on GitHub instead of printing the note
    #[arg(long)]
    pub no_dry_run: bool,

    /// Where to read the commits between the tags from
    #[arg(long, value_enum, default_value = "github")]
    pub source: SourceKind,

    /// Configuration file (default: search upwards for tagnotes.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of titles fetched in parallel
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: Option<u16>,

    /// Working directory
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress per-reference fetch errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Commit source selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SourceKind {
    /// GitHub compare API
    #[default]
    Github,
    /// Local git repository
    Git,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(self.execute_async())
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => {
                let cwd = std::env::current_dir()?;
                let (config, path) = load_config_or_default(&cwd)?;
                if let Some(path) = path {
                    debug!(path = %path.display(), "using config file");
                }
                config
            }
        };

        if let Some(concurrency) = self.concurrency {
            config.notes.concurrency = usize::from(concurrency);
        }

        Ok(config)
    }

    async fn execute_async(&self) -> anyhow::Result<()> {
        info!(
            from = %self.from,
            to = %self.to,
            dry_run = !self.no_dry_run,
            source = ?self.source,
            "generating release note"
        );
        let config = self.load_config()?;
        let github = GitHubClient::from_config(&config)?;

        let commits = match self.source {
            SourceKind::Github => github.compare(&self.from, &self.to).await?,
            SourceKind::Git => {
                let repo = GitRepo::discover(&std::env::current_dir()?)?;
                repo.compare(&self.from, &self.to).await?
            }
        };
        info!(count = commits.len(), "collected commits");

        let registry = ParserRegistry::new(&config);
        let resolver = HtmlTitleResolver::from_config(&config)?;
        let pairs = NotesGenerator::new(&registry, &resolver)
            .with_concurrency(config.notes.concurrency)
            .generate(&commits)
            .await;

        if !self.quiet {
            for (_, result) in &pairs {
                if let TitleResult::Failed { attempted_url, .. } = result {
                    output::fetch_error(attempted_url);
                }
            }
        }

        let document = NoteAssembler::from_config(&config).assemble(&pairs, &self.from, &self.to);
        if document.note_count() == 0 && !self.quiet {
            output::warning("No ticket or pull request references found between the tags.");
        }

        let mut stdout = std::io::stdout().lock();
        let outcome = gate(
            &document,
            &self.from,
            &self.to,
            !self.no_dry_run,
            &github,
            &mut stdout,
        )
        .await?;

        if let PublishOutcome::Published { url } = outcome {
            info!(url = %url, "release published");
        }

        Ok(())
    }
}
