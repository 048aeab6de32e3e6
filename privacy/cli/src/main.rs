//! Privacy CLI - manage privacy.com cards from the terminal

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use privacy_lib::{
    ApiEnvironment, Card, CardListParams, CardState, CardType, ConfigError, PrivacyClient,
    PrivacyConfig, PrivacyError, SpendLimitDuration,
};
use thiserror::Error;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

#[derive(Parser)]
#[command(name = "privacy", version)]
#[command(about = "Manage privacy.com virtual cards", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Use the sandbox environment regardless of PRIVACY_ENVIRONMENT
    #[arg(long, global = true)]
    sandbox: bool,

    /// Send requests to this base URL instead of the environment's
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<Url>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, update, list and fetch cards
    Cards {
        #[command(subcommand)]
        action: CardCommands,
    },
}

#[derive(Subcommand)]
enum CardCommands {
    /// List cards, one page at a time
    List {
        #[command(flatten)]
        filters: ListFilters,
    },

    /// Fetch one card by token (lists cards when no token is given)
    Get {
        /// The card token
        #[arg(value_name = "TOKEN")]
        token: Option<String>,

        #[command(flatten)]
        filters: ListFilters,
    },

    /// Create a new card
    Create {
        #[command(flatten)]
        fields: CardFields,
    },

    /// Update fields of an existing card
    Update {
        /// Token of the card to update
        #[arg(value_name = "CARD_ID")]
        card_id: String,

        #[command(flatten)]
        fields: CardFields,
    },
}

#[derive(Args)]
struct ListFilters {
    /// Only cards belonging to this account
    #[arg(long, value_name = "TOKEN")]
    account_token: Option<String>,

    /// Only cards created on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    begin: Option<NaiveDate>,

    /// Only cards created before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    end: Option<NaiveDate>,

    /// Cards per page
    #[arg(long, default_value_t = privacy_lib::models::DEFAULT_PAGE_SIZE)]
    page_size: u32,

    /// Page number, starting at 1
    #[arg(long, default_value_t = privacy_lib::models::DEFAULT_PAGE)]
    page: u32,
}

impl ListFilters {
    fn into_params(self) -> CardListParams {
        let mut params = CardListParams::new().page_size(self.page_size).page(self.page);
        if let Some(token) = self.account_token {
            params = params.account_token(token);
        }
        if let Some(begin) = self.begin {
            params = params.begin(begin);
        }
        if let Some(end) = self.end {
            params = params.end(end);
        }
        params
    }
}

#[derive(Args)]
struct CardFields {
    /// Card type, e.g. SINGLE_USE or MERCHANT_LOCKED
    #[arg(long = "type", value_name = "TYPE")]
    card_type: Option<String>,

    /// Free-text label
    #[arg(long)]
    memo: Option<String>,

    /// Spend limit in cents
    #[arg(long, value_name = "CENTS")]
    spend_limit: Option<i64>,

    /// Spend limit window, e.g. TRANSACTION or MONTHLY
    #[arg(long, value_name = "DURATION")]
    spend_limit_duration: Option<String>,

    /// Card state, e.g. OPEN or PAUSED
    #[arg(long)]
    state: Option<String>,

    /// Hostname the card is locked to
    #[arg(long)]
    hostname: Option<String>,
}

impl CardFields {
    /// Builds a card carrying only the flags that were given.
    fn into_card(self) -> Card {
        let mut card = Card::new();
        if let Some(card_type) = self.card_type {
            card = card.with_type(enum_flag(card_type, CardType::is_known));
        }
        if let Some(memo) = self.memo {
            card = card.with_memo(memo);
        }
        if let Some(cents) = self.spend_limit {
            card = card.with_spend_limit(cents);
        }
        if let Some(duration) = self.spend_limit_duration {
            card = card.with_spend_limit_duration(enum_flag(
                duration,
                SpendLimitDuration::is_known,
            ));
        }
        if let Some(state) = self.state {
            card = card.with_state(enum_flag(state, CardState::is_known));
        }
        if let Some(hostname) = self.hostname {
            card = card.with_hostname(hostname);
        }
        card
    }
}

/// Maps a flag onto a known variant case-insensitively; anything else is
/// passed through exactly as typed.
fn enum_flag<E: From<String>>(raw: String, is_known: fn(&E) -> bool) -> E {
    let upper = E::from(raw.to_uppercase());
    if is_known(&upper) {
        upper
    } else {
        E::from(raw)
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Privacy(#[from] PrivacyError),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,privacy_lib=info,privacy=info".to_string(),
            2 => "info,privacy_lib=debug,privacy=debug".to_string(),
            _ => "debug,privacy_lib=trace,privacy=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(false)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

/// Builds a client from the environment plus command-line overrides.
fn build_client(sandbox: bool, base_url: Option<Url>) -> Result<PrivacyClient, CliError> {
    let mut config = PrivacyConfig::from_env()?;
    if sandbox {
        config = PrivacyConfig::new(config.api_key(), ApiEnvironment::Sandbox);
    }

    let mut builder = PrivacyClient::builder(config);
    if let Some(url) = base_url {
        builder = builder.base_url(url);
    }
    Ok(builder.build()?)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = build_client(cli.sandbox, cli.base_url)?;
    tracing::debug!(environment = %client.environment(), base_url = %client.base_url(), "Client ready");

    match cli.command {
        Commands::Cards { action } => match action {
            CardCommands::List { filters } => {
                let page = client.list_cards(&filters.into_params()).await?;
                print_json(&page)
            }
            CardCommands::Get { token, filters } => {
                let page = client
                    .get_card(token.as_deref(), &filters.into_params())
                    .await?;
                print_json(&page)
            }
            CardCommands::Create { fields } => {
                let card = client.create_card(&fields.into_card()).await?;
                print_json(&card)
            }
            CardCommands::Update { card_id, fields } => {
                let card = client.update_card(&card_id, &fields.into_card()).await?;
                print_json(&card)
            }
        },
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json);

    if let Err(e) = run(cli).await {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
