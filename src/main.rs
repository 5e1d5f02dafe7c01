use anyhow::Result;
use cask::areas::config::ConfigScope;
use cask::areas::repository::Repository;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cask",
    version = "0.1.0",
    about = "A minimal content-addressable object store",
    long_about = "Cask turns files and directories into immutable, \
    hash-identified objects persisted under a .cask/objects storage root. \
    It is not a full version control system, but the object database one \
    would be built on.",
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
        path: Option<String>,
    },
    #[command(
        name = "commit",
        about = "Snapshot the working directory into the object store",
        long_about = "This command walks the working directory, stores every file and \
        directory as a content-addressed object, and prints the root tree digest."
    )]
    Commit,
    #[command(
        name = "config",
        about = "Show which configuration file applies",
        long_about = "This command resolves the configuration file path for the local, \
        global or system scope. The local scope is the default."
    )]
    Config {
        #[arg(long, help = "Use the repository configuration file")]
        local: bool,
        #[arg(long, help = "Use the per-user configuration file")]
        global: bool,
        #[arg(long, help = "Use the system-wide configuration file")]
        system: bool,
    },
    #[command(
        name = "hash-object",
        about = "Hash an object and optionally write it to the object database",
        long_about = "This command hashes an object file and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(
            short,
            long,
            required = false,
            help = "Write the object to the object database"
        )]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the raw content of an object in the object database. \
        It requires the digest (or an unambiguous prefix) of the object."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object digest to print")]
        sha: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

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
        Commands::Commit => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.commit()?
        }
        Commands::Config {
            local: _,
            global,
            system,
        } => {
            let scope = if *global {
                ConfigScope::Global
            } else if *system {
                ConfigScope::System
            } else {
                ConfigScope::Local
            };

            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.config(scope)?
        }
        Commands::HashObject { write, file } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.hash_object(file, *write)?
        }
        Commands::CatFile { sha } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.cat_file(sha)?
        }
    }

    Ok(())
}
