//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::cache::store::CacheStore;
use crate::fetch::archive::GITIGNORE_URL;

const BANNER: &str = r#"
 ▄▄▄▄▄▄▄▄▄▄▄  ▄▄▄▄▄▄▄▄▄▄▄  ▄▄▄▄▄▄▄▄▄▄▄
▐░░░░░░░░░░░▌▐░░░░░░░░░░░▌▐░░░░░░░░░░░▌
 ▀▀▀▀▀█░█▀▀▀ ▐░█▀▀▀▀▀▀▀█░▌▐░█▀▀▀▀▀▀▀▀▀
      ▐░▌    ▐░▌       ▐░▌▐░▌
      ▐░▌    ▐░▌       ▐░▌▐░█▄▄▄▄▄▄▄▄▄
      ▐░▌    ▐░▌       ▐░▌▐░░░░░░░░░░░▌
      ▐░▌    ▐░▌       ▐░▌▐░█▀▀▀▀▀▀▀▀▀
      ▐░▌    ▐░▌       ▐░▌▐░▌
 ▄▄▄▄▄█░▌    ▐░█▄▄▄▄▄▄▄█░▌▐░█▄▄▄▄▄▄▄▄▄
▐░░░░░░░▌    ▐░░░░░░░░░░░▌▐░░░░░░░░░░░▌
 ▀▀▀▀▀▀▀      ▀▀▀▀▀▀▀▀▀▀▀  ▀▀▀▀▀▀▀▀▀▀▀
"#;

/// joe - generate .gitignore files from the command line.
#[derive(Parser, Debug)]
#[command(name = "joe")]
#[command(
    author,
    version,
    about,
    override_usage = "joe <COMMAND> [ARGS]",
    before_long_help = BANNER,
    long_about = r#"joe composes .gitignore files from the templates published in the
github/gitignore repository.

Templates are downloaded once with `joe update` and cached under ~/.joe-data.
Generated output goes to stdout, so redirect it where you need it.

Examples:
    joe update
    joe ls
    joe search java
    joe g go,node,jetbrains > .gitignore
"#
)]
pub struct Cli {
    /// Directory holding the cached templates.
    #[arg(
        long,
        global = true,
        env = "JOE_DATA_DIR",
        value_name = "DIR",
        long_help = "Directory holding the cached templates.\n\n\
Defaults to ~/.joe-data. `joe update` wipes everything inside it before\n\
downloading, so do not point it at a directory you care about."
    )]
    pub data_dir: Option<PathBuf>,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (repeat for more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        long_help = "Print diagnostics to stderr. Use -v for debug output and -vv for\n\
trace output. Command output on stdout is unaffected."
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all available files.
    #[command(
        name = "ls",
        visible_alias = "list",
        long_about = "Print the number of cached templates followed by their names, sorted\n\
alphabetically.\n\n\
Example:\n\
  joe ls\n"
    )]
    List,

    /// Update all available gitignore files.
    #[command(
        name = "u",
        visible_alias = "update",
        long_about = "Delete the cached templates and download a fresh copy of the\n\
github/gitignore archive.\n\n\
Example:\n\
  joe u\n"
    )]
    Update {
        /// Archive to download (zip).
        #[arg(long, env = "JOE_ARCHIVE_URL", default_value = GITIGNORE_URL, value_name = "URL")]
        url: String,
    },

    /// Generate gitignore files.
    #[command(
        name = "g",
        visible_alias = "generate",
        long_about = r#"Concatenate the named templates into one .gitignore on stdout.

NAMES is a comma-separated list; names are matched case-insensitively and
emitted in the order given. If any name is unknown nothing is printed and the
command fails.

Examples:
    joe g go
    joe g go,node,jetbrains > .gitignore
"#
    )]
    Generate {
        /// Comma-separated template names.
        #[arg(value_name = "NAMES")]
        names: String,
    },

    /// Search for gitignore files (one word per query).
    #[command(
        name = "s",
        visible_alias = "search",
        long_about = r#"Print every template name matching PATTERN.

PATTERN is a regular expression matched anywhere in the (lowercase) name.

Examples:
    joe s java
    joe s '^vis'
"#
    )]
    Search {
        /// Regular expression to match against template names.
        #[arg(value_name = "PATTERN")]
        pattern: String,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let store = CacheStore::resolve(cli.data_dir.as_deref())?;

    match cli.command {
        Commands::List => crate::commands::list::run_list(&store),
        Commands::Update { url } => crate::commands::update::run_update(&store, &url),
        Commands::Generate { names } => crate::commands::generate::run_generate(&store, &names),
        Commands::Search { pattern } => crate::commands::search::run_search(&store, &pattern),
    }
}
