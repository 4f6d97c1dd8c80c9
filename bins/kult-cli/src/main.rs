//! CLI tool for Kult collections.

use clap::{Parser, Subcommand};
use kult_cli::client::KultClient;
use kult_cli::commands::{self, artwork::ArtworkChanges};
use kult_cli::config::Config;
use kult_cli::types::ArtworkInput;
use kult_common::{ArtworkKind, normalize_rating};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kult")]
#[command(about = "Kult collection CLI", long_about = None)]
struct Cli {
    /// API base URL (overrides config)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Wallet address to act as (overrides config)
    #[arg(long, global = true)]
    address: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User operations
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Artwork operations
    Artwork {
        #[command(subcommand)]
        command: ArtworkCommands,
    },
    /// Sharing
    Share {
        #[command(subcommand)]
        command: ShareCommands,
    },
    /// Configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Register the wallet
    Create,
    /// Check whether the wallet is registered
    Check,
}

#[derive(Subcommand)]
enum ArtworkCommands {
    /// Add an artwork to the collection
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        author: String,
        /// Publication year
        #[arg(short, long)]
        year: i32,
        /// book, movie, music, artwork or other
        #[arg(short = 't', long = "type")]
        kind: ArtworkKind,
        #[arg(short, long)]
        description: Option<String>,
        /// 1 to 5
        #[arg(short, long)]
        rating: Option<i64>,
    },
    /// List the collection
    List {
        /// Only show this type
        #[arg(short = 't', long = "type")]
        kind: Option<ArtworkKind>,
    },
    /// Show one artwork
    Show { id: i64 },
    /// Change an artwork's fields
    Update {
        id: i64,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        author: Option<String>,
        #[arg(short, long)]
        year: Option<i32>,
        #[arg(short = 't', long = "type")]
        kind: Option<ArtworkKind>,
        /// Empty string clears it
        #[arg(short, long)]
        description: Option<String>,
        /// 0 clears it
        #[arg(short, long)]
        rating: Option<i64>,
    },
    /// Remove an artwork from the collection
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum ShareCommands {
    /// Print the share link and QR code URL
    Link {
        id: i64,
        /// Build the links from local config instead of asking the server
        #[arg(long)]
        offline: bool,
    },
    /// Open a shared artwork and add it to your collection
    Open { id: i64 },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(url) = cli.api_url {
        config.api.url = url;
    }
    if let Some(address) = cli.address {
        config.wallet.address = Some(address);
    }

    let client = KultClient::new(config.api.url.clone());

    match cli.command {
        Commands::User { command } => {
            let address = config.wallet_address()?;
            match command {
                UserCommands::Create => commands::user::create(address, &client).await?,
                UserCommands::Check => commands::user::check(address, &client).await?,
            }
        }
        Commands::Artwork { command } => match command {
            ArtworkCommands::Add {
                name,
                author,
                year,
                kind,
                description,
                rating,
            } => {
                let input = ArtworkInput {
                    name,
                    author,
                    publication_year: year,
                    kind,
                    description: description.filter(|d| !d.is_empty()),
                    rating: normalize_rating(rating)?,
                };
                commands::artwork::add(config.wallet_address()?, input, &client).await?
            }
            ArtworkCommands::List { kind } => {
                commands::artwork::list(config.wallet_address()?, kind, &client).await?
            }
            ArtworkCommands::Show { id } => commands::artwork::show(id, &client).await?,
            ArtworkCommands::Update {
                id,
                name,
                author,
                year,
                kind,
                description,
                rating,
            } => {
                let changes = ArtworkChanges {
                    name,
                    author,
                    year,
                    kind,
                    description,
                    rating,
                };
                commands::artwork::update(id, config.wallet_address()?, changes, &client).await?
            }
            ArtworkCommands::Delete { id } => {
                commands::artwork::delete(id, config.wallet_address()?, &client).await?
            }
        },
        Commands::Share { command } => match command {
            ShareCommands::Link { id, offline: true } => {
                commands::share::offline_link(id, &config.share)
            }
            ShareCommands::Link { id, offline: false } => {
                commands::share::link(id, &client).await?
            }
            ShareCommands::Open { id } => {
                commands::share::open(id, config.wallet.address.as_deref(), &client).await?
            }
        },
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::show(&config)?,
        },
    }

    Ok(())
}
