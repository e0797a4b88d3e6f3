use anyhow::Context;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use twig::areas::locator::MarkerLocator;
use twig::areas::repository::Repository;
use twig::artifacts::core::PagerWriter;
use twig::commands::porcelain::log::LogOptions;
use twig::errors::TwigError;

/// Environment variable holding the tracing filter directive
const LOG_ENV: &str = "TWIG_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal local version control system",
    long_about = "twig tracks a single working directory across named branches \
    using a staging area and timestamped snapshot commits. \
    Switching branches rebuilds the working directory from scratch.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Add file(s) to the staging area",
        long_about = "This command copies the given files into the staging area. \
        Files that do not exist are reported and skipped."
    )]
    Add {
        #[arg(index = 1, required = true, num_args = 1.., help = "File(s) to add")]
        files: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a commit from the staged files",
        long_about = "This command moves every staged file into a new commit on the current branch."
    )]
    Commit,
    #[command(
        name = "checkout",
        about = "Switch branches",
        long_about = "This command switches to the given branch, creating it from the current branch \
        if it does not exist yet, and rebuilds the working directory."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch to switch to")]
        branch: String,
    },
    #[command(
        name = "log",
        about = "Display the commit history",
        long_about = "This command lists the commits of every branch, oldest first."
    )]
    Log {
        #[arg(short, long, help = "Only show the history of this branch")]
        branch: Option<String>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_repository(writer: Box<dyn std::io::Write>) -> anyhow::Result<Repository> {
    let pwd = std::env::current_dir().context("failed to read the current directory")?;
    Ok(Repository::discover(&pwd, &MarkerLocator, writer)?)
}

fn use_pager() -> bool {
    std::env::var_os("NO_PAGER").is_none() && std::io::stdout().is_terminal()
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => path,
                None => std::env::current_dir()?,
            };
            let mut repository = Repository::new(path, Box::new(std::io::stdout()));

            repository.init().await?;
        }
        Commands::Add { files } => {
            let mut repository = open_repository(Box::new(std::io::stdout()))?;

            repository.add(&files).await?;
        }
        Commands::Commit => {
            let mut repository = open_repository(Box::new(std::io::stdout()))?;

            repository.commit().await?;
        }
        Commands::Checkout { branch } => {
            let mut repository = open_repository(Box::new(std::io::stdout()))?;

            repository
                .checkout(&branch)
                .await
                .with_context(|| format!("failed to check out '{branch}'"))?;
        }
        Commands::Log { branch } => {
            let opts = LogOptions { branch };

            if use_pager() {
                let writer = PagerWriter::new(Pager::new());
                let pager = writer.pager().clone();
                let repository = open_repository(Box::new(writer))?;

                repository.log(&opts)?;
                minus::page_all(pager)?;
            } else {
                let repository = open_repository(Box::new(std::io::stdout()))?;

                repository.log(&opts)?;
            }
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("fatal: {err:#}");
        let code = err
            .downcast_ref::<TwigError>()
            .map_or(1, TwigError::exit_code);
        std::process::exit(code);
    }
}
