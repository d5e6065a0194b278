use catalog_models::Category;
use clap::{ArgAction, Parser, Subcommand};
use commands::{browse, categories, config, detail, search};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;
mod render;

#[derive(Parser)]
#[command(name = "zelstream")]
#[command(about = "ZelStream - browse movies, dramas and anime from the terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the home feed by category
    #[command(long_about = "Show the trending hero title and a category listing. With --interactive, scroll through the listing; more pages load automatically as the end of the list comes into view.")]
    Browse {
        /// Category slug (trending, indonesian-movies, indonesian-drama, kdrama, short-tv, anime)
        #[arg(long, short)]
        category: Option<Category>,

        /// Number of pages to load in non-interactive mode
        #[arg(long, default_value_t = 1)]
        pages: u32,

        /// Scroll through the listing interactively
        #[arg(long, short, action = ArgAction::SetTrue)]
        interactive: bool,

        /// Rows shown per screen in interactive mode
        #[arg(long, default_value_t = 10)]
        rows: usize,
    },
    /// Search the catalog
    Search {
        /// Free-text query
        query: String,
    },
    /// Show a title's details and playable stream
    Detail {
        /// Detail path as shown in listings
        path: String,

        /// Episode id to select instead of the default
        #[arg(long)]
        episode: Option<String>,
    },
    /// List available categories
    Categories,
    /// Show or change configuration
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Point the client at a different catalog API
    SetBaseUrl {
        url: String,
    },
    /// Change the category opened by `browse`
    SetDefaultCategory {
        category: Category,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let config_path = config::resolve_config_path(cli.config.clone());
    let app_config = config::load_config(&config_path)?;

    logging::init_logging(cli.verbose, cli.quiet, &app_config.logging)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    tracing::debug!("Using config file {}", config_path.display());

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Browse {
            category,
            pages,
            interactive,
            rows,
        } => {
            let category = category.unwrap_or(app_config.listing.default_category);
            if interactive {
                browse::run_interactive(&app_config, category, rows, &output).await
            } else {
                browse::run_browse(&app_config, category, pages, &output).await
            }
        }
        Commands::Search { query } => search::run_search(&app_config, &query, &output).await,
        Commands::Detail { path, episode } => detail::run_detail(&app_config, &path, episode.as_deref(), &output).await,
        Commands::Categories => categories::run_categories(&output),
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show);
            config::run_config(cmd, app_config, &config_path, &output)
        }
    }
}
