use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// recipebook - browse, search and save recipes
#[derive(Parser)]
#[command(name = "recipebook")]
#[command(about = "Recipe catalog with search and favorites", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage users
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Import recipes from a JSON file
    Import {
        /// JSON array of recipes
        file: String,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Register a user
    Create {
        #[arg(long)]
        username: String,
    },
    /// Print an access token for a user
    Token {
        #[arg(long)]
        username: String,
    },
    /// Delete a user and their favorites
    Delete {
        #[arg(long)]
        username: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = recipebook::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    recipebook::observability::init_observability(
        "recipebook",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Migrate => cli::migrate::migrate(&config).await,
        Commands::Reset => cli::migrate::reset(&config).await,
        Commands::User { command } => match command {
            UserCommands::Create { username } => cli::user::create(&config, username).await,
            UserCommands::Token { username } => cli::user::token(&config, username).await,
            UserCommands::Delete { username } => cli::user::delete(&config, username).await,
        },
        Commands::Import { file } => cli::import::import(&config, file).await,
    }
}
