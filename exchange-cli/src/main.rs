//! Manual test driver for the exchange gateway
//!
//! Wraps every synchronous admin and trade endpoint in a subcommand so an
//! operator can bootstrap a fresh exchange and poke at it call by call.
//! Response bodies go to stdout as pretty-printed JSON; logs go to stderr.

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use rust_decimal_macros::dec;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::decimal::{Fee, Price, Quantity};
use common::error::Result;
use common::model::admin::{Asset, SymbolSpec, SymbolType};
use common::model::trade::{OrderAction, OrderType};
use exchange_client::client::DEFAULT_DEPTH;
use exchange_client::{ApiResponse, Bootstrap, ClientConfig, ExchangeClient};

/// Exchange gateway CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Gateway base URL (overrides EXCHANGE_API_URL)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Set the log level
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,

    /// Commands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a fresh exchange: two users, BTC and USDT, the BTCUSDT pair,
    /// and a starting balance of every asset for every user
    Init {
        /// Logical amount of each asset credited to each user
        #[arg(long, default_value_t = 100_000)]
        amount: i64,
    },

    /// Create a user
    CreateUser {
        /// Numeric user id
        uid: i64,
    },

    /// Register an asset
    AddAsset {
        /// Ticker code, e.g. BTC
        code: String,

        /// Numeric asset id
        #[arg(long)]
        asset_id: i32,

        /// Decimal scale for amounts of this asset
        #[arg(long, default_value_t = 6)]
        scale: u32,
    },

    /// Register a tradable symbol
    AddSymbol {
        /// Numeric symbol id
        #[arg(long, default_value_t = 1)]
        symbol_id: i32,

        /// Symbol code
        #[arg(long, default_value = "BTCUSDT")]
        symbol_code: String,

        /// Symbol kind (pair or futures)
        #[arg(long, default_value_t = SymbolType::CurrencyExchangePair)]
        symbol_type: SymbolType,

        /// Base asset code
        #[arg(long, default_value = "BTC")]
        base_asset: String,

        /// Quote currency code
        #[arg(long, default_value = "USDT")]
        quote_currency: String,

        /// Minimum tradable quantity step
        #[arg(long, default_value_t = dec!(1))]
        lot_size: Quantity,

        /// Minimum price step
        #[arg(long, default_value_t = dec!(1))]
        step_size: Price,

        /// Taker fee rate
        #[arg(long, default_value_t = Fee::ZERO)]
        taker_fee: Fee,

        /// Maker fee rate
        #[arg(long, default_value_t = Fee::ZERO)]
        maker_fee: Fee,

        /// Margin requirement for buys
        #[arg(long, default_value_t = Fee::ZERO)]
        margin_buy: Fee,

        /// Margin requirement for sells
        #[arg(long, default_value_t = Fee::ZERO)]
        margin_sell: Fee,

        /// Upper limit for order prices
        #[arg(long, default_value_t = dec!(10000000))]
        price_high_limit: Price,

        /// Lower limit for order prices
        #[arg(long, default_value_t = dec!(0.000001))]
        price_low_limit: Price,
    },

    /// Credit a user's account
    Deposit {
        /// Numeric user id
        uid: i64,

        /// Asset code to credit
        currency: String,

        /// Logical amount before scaling
        #[arg(long, default_value_t = 100_000)]
        amount: i64,

        /// Decimal scale of the asset
        #[arg(long, default_value_t = 6)]
        scale: u32,
    },

    /// Fetch a user's balances and open orders
    UserState {
        /// Numeric user id
        uid: i64,
    },

    /// Fetch service metadata
    Info,

    /// Fetch the order book for a symbol
    Orderbook {
        /// Symbol code
        symbol: String,

        /// Book depth to request
        #[arg(long, default_value_t = DEFAULT_DEPTH)]
        depth: u32,
    },

    /// Place a limit order
    PlaceOrder {
        /// Numeric user id
        uid: i64,

        /// Symbol code
        symbol: String,

        /// Order side (ask or bid)
        #[arg(long)]
        action: OrderAction,

        /// Limit price in scaled price units
        #[arg(long, default_value_t = 8010)]
        price: i64,

        /// Order size in lots
        #[arg(long, default_value_t = 5)]
        size: i64,

        /// Time in force (gtc or ioc)
        #[arg(long, default_value_t = OrderType::GTC)]
        order_type: OrderType,
    },

    /// Cancel an open order
    CancelOrder {
        /// Numeric user id
        uid: i64,

        /// Symbol code
        symbol: String,

        /// Order id to cancel
        order_id: i64,
    },

    /// Move an open order to a new price
    MoveOrder {
        /// Numeric user id
        uid: i64,

        /// Symbol code
        symbol: String,

        /// Order id to move
        order_id: i64,

        /// Replacement limit price in scaled price units
        #[arg(long)]
        price: i64,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    // Logs stay on stderr so stdout carries nothing but response bodies
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "exchange_cli={level},exchange_client={level}",
                    level = cli.log_level
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(cli).await {
        error!("{}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match cli.host {
        Some(host) => ClientConfig::new(host),
        None => ClientConfig::from_env(),
    };
    let client = ExchangeClient::new(config)?;

    match cli.command {
        Commands::Init { amount } => {
            let plan = Bootstrap {
                funding_amount: amount,
                ..Bootstrap::default()
            };
            for reply in plan.apply(&client).await? {
                emit(&reply);
            }
        }
        Commands::CreateUser { uid } => emit(&client.create_user(uid).await?),
        Commands::AddAsset {
            code,
            asset_id,
            scale,
        } => {
            let asset = Asset {
                asset_code: code,
                asset_id,
                scale,
            };
            emit(&client.register_asset(&asset).await?);
        }
        Commands::AddSymbol {
            symbol_id,
            symbol_code,
            symbol_type,
            base_asset,
            quote_currency,
            lot_size,
            step_size,
            taker_fee,
            maker_fee,
            margin_buy,
            margin_sell,
            price_high_limit,
            price_low_limit,
        } => {
            let spec = SymbolSpec {
                symbol_id,
                symbol_code,
                symbol_type,
                base_asset,
                quote_currency,
                lot_size,
                step_size,
                taker_fee,
                maker_fee,
                margin_buy,
                margin_sell,
                price_high_limit,
                price_low_limit,
            };
            emit(&client.register_symbol(&spec).await?);
        }
        Commands::Deposit {
            uid,
            currency,
            amount,
            scale,
        } => emit(&client.deposit(uid, &currency, amount, scale).await?),
        Commands::UserState { uid } => emit(&client.user_state(uid).await?),
        Commands::Info => emit(&client.info().await?),
        Commands::Orderbook { symbol, depth } => {
            emit(&client.order_book(&symbol, depth).await?)
        }
        Commands::PlaceOrder {
            uid,
            symbol,
            action,
            price,
            size,
            order_type,
        } => emit(
            &client
                .place_order(uid, &symbol, price, size, action, order_type)
                .await?,
        ),
        Commands::CancelOrder {
            uid,
            symbol,
            order_id,
        } => emit(&client.cancel_order(uid, &symbol, order_id).await?),
        Commands::MoveOrder {
            uid,
            symbol,
            order_id,
            price,
        } => emit(&client.move_order(uid, &symbol, order_id, price).await?),
    }

    Ok(())
}

/// Print a response body to stdout as pretty JSON
fn emit(response: &ApiResponse) {
    println!("{:#}", response.body);
}
