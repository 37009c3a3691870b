use anyhow::Result;
use clap::{Parser, Subcommand};
use wit::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "wit",
    version = "0.1.0",
    about = "A minimal local version-control engine",
    long_about = "wit snapshots a working directory into immutable commits, \
    tracks named branches and HEAD, and supports staging, committing, \
    branch switching and a simplified file-level merge.",
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
    #[command(name = "init", about = "Initialize a new repository")]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(name = "add", about = "Stage a file or directory for the next commit")]
    Add {
        #[arg(index = 1, help = "The path to stage")]
        path: String,
    },
    #[command(name = "commit", about = "Snapshot the staging area as a new commit")]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "status", about = "Show pending, unstaged and untracked paths")]
    Status,
    #[command(name = "rm", about = "Remove a file from the staging area and the working tree")]
    Rm {
        #[arg(index = 1, help = "The path to remove")]
        path: String,
    },
    #[command(name = "checkout", about = "Switch to a branch or a commit id")]
    Checkout {
        #[arg(index = 1, help = "Branch name or commit id")]
        target: String,
    },
    #[command(name = "branch", about = "Create a branch at the current HEAD")]
    Branch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current HEAD")]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch: String,
    },
}

fn repository() -> Result<Repository> {
    let pwd = std::env::current_dir()?;
    Repository::discover(&pwd, Box::new(std::io::stdout()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => {
                    let pwd = std::env::current_dir()?;
                    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
                }
            };

            repository.init()?
        }
        Commands::Add { path } => repository()?.add(path)?,
        Commands::Commit { message } => {
            repository()?.commit(message.as_str())?;
        }
        Commands::Status => {
            repository()?.status()?;
        }
        Commands::Rm { path } => repository()?.remove(path)?,
        Commands::Checkout { target } => {
            repository()?.checkout(target)?;
        }
        Commands::Branch { name } => repository()?.branch(name)?,
        Commands::Merge { branch } => {
            repository()?.merge(branch)?;
        }
    }

    Ok(())
}
